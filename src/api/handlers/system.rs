//! System endpoints: greeting, health check, aggregated status.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{StatusMessage, StatusResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /` — Static greeting.
///
/// # Errors
///
/// Returns [`GatewayError::StorageUnavailable`] if storage cannot be
/// initialized.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Greeting",
    responses(
        (status = 200, description = "Service is up", body = StatusMessage),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn root_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    state.event_store.initialize().await?;
    Ok(Json(StatusMessage::new("Bonjour tout le monde !")))
}

/// `GET /health` — Service health status.
///
/// # Errors
///
/// Returns [`GatewayError::StorageUnavailable`] if storage cannot be
/// initialized.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Initializes storage if needed and reports `ok`.",
    responses(
        (status = 200, description = "Service is healthy", body = StatusMessage),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    state.event_store.initialize().await?;
    Ok(Json(StatusMessage::new("ok")))
}

/// `GET /status` — Event count plus backup freshness.
///
/// # Errors
///
/// Returns [`GatewayError::DirectoryUnavailable`] if the backup directory
/// cannot be listed. A failed count is reported inside the body instead.
#[utoipa::path(
    get,
    path = "/status",
    tag = "System",
    summary = "Aggregated status",
    description = "Reports the event count and the name and age of the newest backup. \
                   When no backup exists the name is `Aucun backup trouvé` and the age `-1`.",
    responses(
        (status = 200, description = "Status snapshot", body = StatusResponse),
        (status = 503, description = "Backup directory unavailable", body = ErrorResponse),
    )
)]
pub async fn status_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let snapshot = state.status_service.get_status().await?;
    Ok(Json(StatusResponse::from(snapshot)))
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
}
