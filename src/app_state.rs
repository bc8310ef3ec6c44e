//! Shared application state injected into all Axum handlers.

use crate::persistence::EventStore;
use crate::service::StatusService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Append-only event log.
    pub event_store: EventStore,
    /// Aggregated health reporting.
    pub status_service: StatusService,
}
