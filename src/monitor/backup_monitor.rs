//! Read-only observation of the external backup directory.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use glob::Pattern;
use tokio::sync::Mutex;

use crate::config::GatewayConfig;
use crate::domain::BackupFile;
use crate::domain::backup::select_latest;
use crate::error::GatewayError;

/// Last successful scan, reused while younger than the configured TTL.
#[derive(Debug, Clone)]
struct CachedScan {
    scanned_at: Instant,
    latest: Option<BackupFile>,
}

/// Finds the newest backup artifact in a directory it never writes to.
///
/// By default every call re-scans the directory. With a TTL configured,
/// the last successful result is reused until it expires or
/// [`BackupMonitor::invalidate`] is called. Failed scans are never cached.
#[derive(Debug)]
pub struct BackupMonitor {
    dir: PathBuf,
    pattern: Pattern,
    cache_ttl: Option<Duration>,
    cache: Mutex<Option<CachedScan>>,
}

impl BackupMonitor {
    /// Creates a monitor for `config.backup_dir` / `config.backup_pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the pattern is not a valid glob.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let pattern = Pattern::new(&config.backup_pattern).map_err(|e| {
            GatewayError::Internal(format!(
                "invalid backup pattern {:?}: {e}",
                config.backup_pattern
            ))
        })?;

        Ok(Self {
            dir: config.backup_dir.clone(),
            pattern,
            cache_ttl: config.backup_cache_ttl(),
            cache: Mutex::new(None),
        })
    }

    /// Returns the monitored directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the newest matching backup, or `None` if nothing matches.
    ///
    /// The directory listing runs on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DirectoryUnavailable`] if the directory
    /// cannot be listed.
    pub async fn latest(&self) -> Result<Option<BackupFile>, GatewayError> {
        let Some(ttl) = self.cache_ttl else {
            return self.scan().await;
        };

        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref().filter(|c| c.scanned_at.elapsed() < ttl) {
            return Ok(cached.latest.clone());
        }

        let latest = self.scan().await?;
        *cache = Some(CachedScan {
            scanned_at: Instant::now(),
            latest: latest.clone(),
        });
        Ok(latest)
    }

    /// Drops any cached scan so the next call hits the filesystem.
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
    }

    async fn scan(&self) -> Result<Option<BackupFile>, GatewayError> {
        let dir = self.dir.clone();
        let pattern = self.pattern.clone();
        tokio::task::spawn_blocking(move || find_latest_backup(&dir, &pattern))
            .await
            .map_err(|e| GatewayError::Internal(format!("backup scan task failed: {e}")))?
    }
}

/// Lists `dir`, keeps regular files whose name matches `pattern`, and
/// returns the one with the latest creation time.
///
/// Files that disappear between listing and `stat` are skipped. Creation
/// time falls back to modification time on filesystems without birth time.
///
/// # Errors
///
/// Returns [`GatewayError::DirectoryUnavailable`] if `dir` is missing or
/// cannot be read. An empty listing is `Ok(None)`.
pub fn find_latest_backup(
    dir: &Path,
    pattern: &Pattern,
) -> Result<Option<BackupFile>, GatewayError> {
    let unavailable =
        |e: std::io::Error| GatewayError::DirectoryUnavailable(format!("{}: {e}", dir.display()));

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }

        let metadata = match std::fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!(file = name, error = %e, "backup vanished during scan");
                continue;
            }
        };
        let Ok(modified) = metadata.modified() else {
            tracing::warn!(file = name, "backup has no modification time");
            continue;
        };
        let created = metadata.created().unwrap_or(modified);

        candidates.push(BackupFile {
            name: name.to_string(),
            created_at: DateTime::<Utc>::from(created),
            modified_at: DateTime::<Utc>::from(modified),
        });
    }

    Ok(select_latest(candidates))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::SystemTime;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        let Ok(dir) = TempDir::new() else {
            panic!("tempdir");
        };
        dir
    }

    fn touch(dir: &Path, name: &str) -> File {
        let Ok(file) = File::create(dir.join(name)) else {
            panic!("create {name}");
        };
        file
    }

    fn backup_pattern() -> Pattern {
        let Ok(pattern) = Pattern::new("app-*.db") else {
            panic!("valid pattern");
        };
        pattern
    }

    fn monitor_for(dir: &Path, ttl_secs: u64) -> BackupMonitor {
        let mut config = GatewayConfig::with_paths(dir.join("app.db"), dir);
        config.backup_cache_ttl_secs = ttl_secs;
        let Ok(monitor) = BackupMonitor::new(&config) else {
            panic!("monitor");
        };
        monitor
    }

    #[test]
    fn empty_directory_has_no_backup() {
        let dir = temp_dir();
        let result = find_latest_backup(dir.path(), &backup_pattern());
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn missing_directory_is_unavailable() {
        let dir = temp_dir();
        let result = find_latest_backup(&dir.path().join("gone"), &backup_pattern());
        assert!(matches!(result, Err(GatewayError::DirectoryUnavailable(_))));
    }

    #[test]
    fn non_matching_files_and_directories_are_ignored() {
        let dir = temp_dir();
        touch(dir.path(), "app.db");
        touch(dir.path(), "other-1.db");
        touch(dir.path(), "app-1.db.tmp");
        if std::fs::create_dir(dir.path().join("app-dir.db")).is_err() {
            panic!("mkdir");
        }

        let result = find_latest_backup(dir.path(), &backup_pattern());
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn newest_creation_wins_and_age_tracks_mtime() {
        let dir = temp_dir();
        let older = touch(dir.path(), "app-1.db");
        std::thread::sleep(Duration::from_millis(50));
        let newer = touch(dir.path(), "app-2.db");

        // Keep mtimes in creation order for filesystems without birth time.
        let two_minutes_ago = SystemTime::now() - Duration::from_secs(120);
        let ten_minutes_ago = SystemTime::now() - Duration::from_secs(600);
        if older.set_modified(ten_minutes_ago).is_err()
            || newer.set_modified(two_minutes_ago).is_err()
        {
            panic!("set mtime");
        }

        let Ok(Some(latest)) = find_latest_backup(dir.path(), &backup_pattern()) else {
            panic!("expected a backup");
        };
        assert_eq!(latest.name, "app-2.db");

        let now = Utc::now();
        let expected = (now - DateTime::<Utc>::from(two_minutes_ago)).num_seconds();
        assert!((latest.age_seconds(now) - expected).abs() <= 1);
        assert!((119..=121).contains(&latest.age_seconds(now)));
    }

    #[tokio::test]
    async fn uncached_monitor_rescans_every_call() {
        let dir = temp_dir();
        let monitor = monitor_for(dir.path(), 0);
        assert!(matches!(monitor.latest().await, Ok(None)));

        touch(dir.path(), "app-1.db");
        let Ok(Some(latest)) = monitor.latest().await else {
            panic!("expected a backup");
        };
        assert_eq!(latest.name, "app-1.db");
    }

    #[tokio::test]
    async fn cached_monitor_serves_stale_until_invalidated() {
        let dir = temp_dir();
        let monitor = monitor_for(dir.path(), 3600);
        assert!(matches!(monitor.latest().await, Ok(None)));

        touch(dir.path(), "app-1.db");
        assert!(matches!(monitor.latest().await, Ok(None)));

        monitor.invalidate().await;
        let Ok(Some(latest)) = monitor.latest().await else {
            panic!("expected a backup after invalidation");
        };
        assert_eq!(latest.name, "app-1.db");
    }

    #[tokio::test]
    async fn scan_failures_are_not_cached() {
        let dir = temp_dir();
        let backups = dir.path().join("backup");
        let monitor = monitor_for(&backups, 3600);
        assert!(matches!(
            monitor.latest().await,
            Err(GatewayError::DirectoryUnavailable(_))
        ));

        if std::fs::create_dir(&backups).is_err() {
            panic!("mkdir");
        }
        assert!(matches!(monitor.latest().await, Ok(None)));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let mut config = GatewayConfig::with_paths("app.db", "/backup");
        config.backup_pattern = "app-[.db".to_string();
        assert!(matches!(
            BackupMonitor::new(&config),
            Err(GatewayError::Internal(_))
        ));
    }
}
