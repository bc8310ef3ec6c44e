//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{
    AddEventResponse, CountField, CountResponse, EventDto, StatusMessage, StatusResponse,
};
use super::handlers::{events, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI 3 description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "eventlog-gateway",
        description = "Append-only event log with backup freshness monitoring."
    ),
    paths(
        system::root_handler,
        system::health_handler,
        system::status_handler,
        events::add_event,
        events::consultation,
        events::count_events,
    ),
    components(schemas(
        AddEventResponse,
        CountField,
        CountResponse,
        EventDto,
        StatusMessage,
        StatusResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Greeting, health, and aggregated status"),
        (name = "Events", description = "Append and query the event log"),
    )
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json` — served directly when Swagger UI is
/// compiled out.
#[cfg(not(feature = "swagger-ui"))]
pub async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/status", "/add", "/consultation", "/count"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
