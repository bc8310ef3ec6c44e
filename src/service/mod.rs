//! Service layer: business logic orchestration.
//!
//! [`StatusService`] aggregates the event store and the backup monitor
//! into a single health snapshot.

pub mod status_service;

pub use status_service::StatusService;
