//! DTOs for the greeting, health, and aggregated status endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{EventCount, StatusSnapshot};

/// Reported as `last_backup_file` when no backup matches.
pub const NO_BACKUP_SENTINEL: &str = "Aucun backup trouvé";

/// Reported as `backup_age_seconds` when no backup matches.
pub const NO_BACKUP_AGE: i64 = -1;

/// Single-field `{"status": ...}` body used by `/` and `/health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    /// Human-readable status text.
    pub status: String,
}

impl StatusMessage {
    /// Wraps a status text.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// The `count` field of `GET /status`: a number, or error text when the
/// count could not be read.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CountField {
    /// Number of stored events.
    Count(i64),
    /// `"Erreur: <detail>"`.
    Error(String),
}

impl From<EventCount> for CountField {
    fn from(count: EventCount) -> Self {
        match count {
            EventCount::Available(n) => Self::Count(n),
            EventCount::Failed(detail) => Self::Error(format!("Erreur: {detail}")),
        }
    }
}

/// Response body for `GET /status`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Event count, or error text.
    pub count: CountField,
    /// Name of the newest backup, or the "no backup" sentinel.
    pub last_backup_file: String,
    /// Seconds since the newest backup was modified, or `-1`.
    pub backup_age_seconds: i64,
}

impl From<StatusSnapshot> for StatusResponse {
    fn from(snapshot: StatusSnapshot) -> Self {
        let (last_backup_file, backup_age_seconds) = match snapshot.latest_backup {
            Some(backup) => (backup.name, backup.age_seconds),
            None => (NO_BACKUP_SENTINEL.to_string(), NO_BACKUP_AGE),
        };
        Self {
            count: snapshot.event_count.into(),
            last_backup_file,
            backup_age_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BackupFreshness;
    use serde_json::json;

    #[test]
    fn missing_backup_renders_sentinels() {
        let response = StatusResponse::from(StatusSnapshot {
            event_count: EventCount::Available(4),
            latest_backup: None,
        });
        let value = serde_json::to_value(&response).ok();
        assert_eq!(
            value,
            Some(json!({
                "count": 4,
                "last_backup_file": "Aucun backup trouvé",
                "backup_age_seconds": -1
            }))
        );
    }

    #[test]
    fn failed_count_renders_error_text() {
        let response = StatusResponse::from(StatusSnapshot {
            event_count: EventCount::Failed("database is locked".to_string()),
            latest_backup: Some(BackupFreshness {
                name: "app-3.db".to_string(),
                age_seconds: 3600,
            }),
        });
        let value = serde_json::to_value(&response).ok();
        assert_eq!(
            value,
            Some(json!({
                "count": "Erreur: database is locked",
                "last_backup_file": "app-3.db",
                "backup_age_seconds": 3600
            }))
        );
    }
}
