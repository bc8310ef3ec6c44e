//! Computed health snapshot combining the event count with backup freshness.

/// Outcome of counting events for a status report.
///
/// A failed count is data, not a fatal error: the snapshot still reports
/// the backup side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventCount {
    /// The count succeeded.
    Available(i64),
    /// The count failed; carries the error detail.
    Failed(String),
}

/// The newest backup and its age at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFreshness {
    /// File name of the selected backup.
    pub name: String,
    /// Seconds since its last modification (may be negative).
    pub age_seconds: i64,
}

/// Ephemeral view recomputed on every status request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Result of counting stored events.
    pub event_count: EventCount,
    /// Newest backup, or `None` when the directory holds no match.
    pub latest_backup: Option<BackupFreshness>,
}
