//! Observed backup artifacts and freshness arithmetic.

use chrono::{DateTime, Utc};

/// A backup file found in the monitored directory.
///
/// Observed, never owned: the gateway does not create, rotate, or delete
/// these files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    /// File name (no directory component).
    pub name: String,
    /// Birth time, or modification time where the filesystem lacks one.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub modified_at: DateTime<Utc>,
}

impl BackupFile {
    /// Seconds elapsed between the last modification and `now`, truncated
    /// toward zero.
    ///
    /// Not clamped: a file modified "in the future" (clock skew) yields a
    /// negative age.
    #[must_use]
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.modified_at).num_seconds()
    }
}

/// Picks the most recently created backup.
///
/// Ties on creation time go to the lexicographically greatest name, so the
/// result does not depend on directory listing order.
#[must_use]
pub fn select_latest<I>(candidates: I) -> Option<BackupFile>
where
    I: IntoIterator<Item = BackupFile>,
{
    candidates.into_iter().max_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.name.cmp(&b.name))
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        let Some(ts) = Utc.timestamp_opt(1_700_000_000 + secs, 0).single() else {
            panic!("valid timestamp");
        };
        ts
    }

    fn backup(name: &str, created: i64, modified: i64) -> BackupFile {
        BackupFile {
            name: name.to_string(),
            created_at: at(created),
            modified_at: at(modified),
        }
    }

    #[test]
    fn select_latest_of_nothing_is_none() {
        assert!(select_latest(Vec::new()).is_none());
    }

    #[test]
    fn select_latest_prefers_newest_creation() {
        let picked = select_latest(vec![backup("app-2.db", 10, 10), backup("app-1.db", 0, 50)]);
        assert_eq!(picked.map(|b| b.name).as_deref(), Some("app-2.db"));
    }

    #[test]
    fn ties_go_to_greatest_name_regardless_of_order() {
        let forward = select_latest(vec![backup("app-a.db", 5, 5), backup("app-b.db", 5, 5)]);
        let backward = select_latest(vec![backup("app-b.db", 5, 5), backup("app-a.db", 5, 5)]);
        assert_eq!(forward.map(|b| b.name).as_deref(), Some("app-b.db"));
        assert_eq!(backward.map(|b| b.name).as_deref(), Some("app-b.db"));
    }

    #[test]
    fn age_truncates_toward_zero() {
        let file = backup("app-1.db", 0, 0);
        let now = at(90) + Duration::milliseconds(999);
        assert_eq!(file.age_seconds(now), 90);
    }

    #[test]
    fn age_is_negative_under_clock_skew() {
        let file = backup("app-1.db", 0, 30);
        assert_eq!(file.age_seconds(at(0)), -30);
    }
}
