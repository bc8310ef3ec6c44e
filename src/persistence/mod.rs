//! Persistence layer: SQLite event log.
//!
//! The concrete store uses `sqlx::SqlitePool` for async access to a single
//! storage file shared by all request handlers.

pub mod models;
pub mod sqlite;

pub use sqlite::EventStore;
