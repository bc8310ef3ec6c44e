//! # eventlog-gateway
//!
//! Minimal event-logging service: accepts timestamped messages over HTTP,
//! persists them in an append-only SQLite log, and reports how fresh the
//! newest externally produced backup is.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── StatusService (service/)
//!     │       │
//!     │       ├── BackupMonitor (monitor/) ── /backup/app-*.db
//!     │       │
//!     └───────┴── EventStore (persistence/) ── SQLite file
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod monitor;
pub mod persistence;
pub mod service;
