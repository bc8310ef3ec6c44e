//! Backup freshness monitoring.
//!
//! [`BackupMonitor`] inspects a directory populated by an external backup
//! job and reports the newest artifact matching the configured pattern.

pub mod backup_monitor;

pub use backup_monitor::{BackupMonitor, find_latest_backup};
