//! Event log handlers: add, consultation, count.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{AddEventParams, AddEventResponse, CountResponse, EventDto};
use crate::app_state::AppState;
use crate::domain::DEFAULT_MESSAGE;
use crate::error::{ErrorResponse, GatewayError};

/// Number of events returned by `GET /consultation`.
pub const CONSULTATION_LIMIT: u32 = 50;

/// `GET /add` — Append an event.
///
/// # Errors
///
/// Returns [`GatewayError`] if storage cannot be initialized or written.
#[utoipa::path(
    get,
    path = "/add",
    tag = "Events",
    summary = "Append an event",
    description = "Stores the given message (default `hello`) stamped with the current UTC time.",
    params(AddEventParams),
    responses(
        (status = 200, description = "Event stored", body = AddEventResponse),
        (status = 500, description = "Storage write failed", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn add_event(
    State(state): State<AppState>,
    Query(params): Query<AddEventParams>,
) -> Result<impl IntoResponse, GatewayError> {
    state.event_store.initialize().await?;

    let message = params
        .message
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    let event = state.event_store.append(&message).await?;

    tracing::info!(id = %event.id, "event added");
    Ok(Json(AddEventResponse::from(event)))
}

/// `GET /consultation` — Most recent events, newest first.
///
/// # Errors
///
/// Returns [`GatewayError`] if storage cannot be initialized or read.
#[utoipa::path(
    get,
    path = "/consultation",
    tag = "Events",
    summary = "List recent events",
    description = "Returns up to 50 most recent events ordered by id descending.",
    responses(
        (status = 200, description = "Recent events", body = Vec<EventDto>),
        (status = 500, description = "Storage read failed", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn consultation(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    state.event_store.initialize().await?;

    let events = state.event_store.list_recent(CONSULTATION_LIMIT).await?;
    let data: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok(Json(data))
}

/// `GET /count` — Total number of stored events.
///
/// # Errors
///
/// Returns [`GatewayError`] if storage cannot be initialized or read.
#[utoipa::path(
    get,
    path = "/count",
    tag = "Events",
    summary = "Count events",
    responses(
        (status = 200, description = "Event count", body = CountResponse),
        (status = 500, description = "Storage read failed", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn count_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    state.event_store.initialize().await?;

    let count = state.event_store.count().await?;
    Ok(Json(CountResponse { count }))
}

/// Event log routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add", get(add_event))
        .route("/consultation", get(consultation))
        .route("/count", get(count_events))
}
