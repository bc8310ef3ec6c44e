//! Status service: best-effort health snapshot over the store and the
//! backup directory.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{BackupFreshness, EventCount, StatusSnapshot};
use crate::error::GatewayError;
use crate::monitor::BackupMonitor;
use crate::persistence::EventStore;

/// Composes the event count and backup freshness into one snapshot.
///
/// The two sub-checks run concurrently. A failed count is recorded in the
/// snapshot instead of aborting it; a backup directory that cannot be read
/// fails the whole call, because "unreadable" must stay distinguishable
/// from "empty".
#[derive(Debug, Clone)]
pub struct StatusService {
    store: EventStore,
    monitor: Arc<BackupMonitor>,
}

impl StatusService {
    /// Creates a new `StatusService`.
    #[must_use]
    pub fn new(store: EventStore, monitor: Arc<BackupMonitor>) -> Self {
        Self { store, monitor }
    }

    /// Computes a fresh [`StatusSnapshot`].
    ///
    /// Read-only: touches storage and the backup directory but changes
    /// neither.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DirectoryUnavailable`] if the backup
    /// directory cannot be listed.
    pub async fn get_status(&self) -> Result<StatusSnapshot, GatewayError> {
        let (count, latest) = tokio::join!(self.store.count(), self.monitor.latest());

        let event_count = match count {
            Ok(n) => EventCount::Available(n),
            Err(e) => {
                tracing::warn!(error = %e, "event count unavailable for status");
                EventCount::Failed(e.to_string())
            }
        };

        let now = Utc::now();
        let latest_backup = latest?.map(|backup| BackupFreshness {
            age_seconds: backup.age_seconds(now),
            name: backup.name,
        });

        tracing::debug!(
            count_ok = matches!(event_count, EventCount::Available(_)),
            backup_found = latest_backup.is_some(),
            "status computed"
        );
        Ok(StatusSnapshot {
            event_count,
            latest_backup,
        })
    }
}
