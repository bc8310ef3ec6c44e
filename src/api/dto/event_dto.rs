//! Event-related DTOs for the add, consultation, and count endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Event;

/// Query parameters for `GET /add`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddEventParams {
    /// Message to record. Defaults to `"hello"` when omitted.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for `GET /add`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddEventResponse {
    /// Always `"added"`.
    pub status: String,
    /// Identifier assigned by the store.
    pub id: i64,
    /// ISO-8601 UTC timestamp with trailing `Z`.
    pub timestamp: String,
    /// Stored message.
    pub message: String,
}

impl From<Event> for AddEventResponse {
    fn from(event: Event) -> Self {
        Self {
            status: "added".to_string(),
            id: event.id.get(),
            timestamp: event.timestamp_text(),
            message: event.message,
        }
    }
}

/// One entry of the `GET /consultation` listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventDto {
    /// Event identifier.
    pub id: i64,
    /// ISO-8601 UTC timestamp with trailing `Z`.
    pub timestamp: String,
    /// Message text.
    pub message: String,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.get(),
            timestamp: event.timestamp_text(),
            message: event.message,
        }
    }
}

/// Response body for `GET /count`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    /// Number of stored events.
    pub count: i64,
}
