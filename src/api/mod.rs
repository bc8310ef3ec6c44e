//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root, matching the paths existing
//! clients already call.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::GatewayConfig;

/// Builds the complete API router with all REST endpoints and the
/// OpenAPI document.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        "/api-docs/openapi.json",
        axum::routing::get(openapi::openapi_json),
    );

    router
}

/// Builds the full application: routes, tracing, CORS, and the
/// per-request timeout, bound to `state`.
pub fn build_app(state: AppState, config: &GatewayConfig) -> Router {
    with_middleware(build_router().with_state(state), config)
}

/// Wraps `router` in the tracing, timeout, and CORS layers. Requests that
/// outlive `config.request_timeout()` get `408 Request Timeout`.
pub fn with_middleware(router: Router, config: &GatewayConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                config.request_timeout(),
            ))
            .layer(CorsLayer::permissive()),
    )
}
