//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: settings come from environment variables
//! (or a `.env` file via `dotenvy`). The backup location is a fixed
//! deployment convention and is never read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Directory where the external backup job drops its artifacts.
pub const BACKUP_DIR: &str = "/backup";

/// File name pattern identifying backup artifacts inside [`BACKUP_DIR`].
pub const BACKUP_PATTERN: &str = "app-*.db";

/// Storage file used when `DB_PATH` is unset.
pub const DEFAULT_DB_PATH: &str = "/data/app.db";

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`] and passed
/// explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Path of the SQLite storage file.
    pub db_path: PathBuf,

    /// Maximum number of pooled storage connections.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a storage connection.
    pub database_acquire_timeout_secs: u64,

    /// How long a writer waits on a locked database before failing.
    pub database_busy_timeout_ms: u64,

    /// Upper bound on the time spent serving a single request.
    pub request_timeout_secs: u64,

    /// Directory scanned for backup artifacts.
    pub backup_dir: PathBuf,

    /// Glob pattern matched against backup file names.
    pub backup_pattern: String,

    /// Lifetime of a cached backup scan (0 = scan on every request).
    pub backup_cache_ttl_secs: u64,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?;

        let db_path = std::env::var("DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        Ok(Self {
            listen_addr,
            db_path,
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 5),
            database_acquire_timeout_secs: parse_env("DATABASE_ACQUIRE_TIMEOUT_SECS", 5),
            database_busy_timeout_ms: parse_env("DATABASE_BUSY_TIMEOUT_MS", 5_000),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 10),
            backup_dir: PathBuf::from(BACKUP_DIR),
            backup_pattern: BACKUP_PATTERN.to_string(),
            backup_cache_ttl_secs: parse_env("BACKUP_CACHE_TTL_SECS", 0),
        })
    }

    /// Builds a configuration rooted at explicit storage and backup
    /// locations, with every other setting at its default.
    #[must_use]
    pub fn with_paths(db_path: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            db_path: db_path.into(),
            database_max_connections: 5,
            database_acquire_timeout_secs: 5,
            database_busy_timeout_ms: 5_000,
            request_timeout_secs: 10,
            backup_dir: backup_dir.into(),
            backup_pattern: BACKUP_PATTERN.to_string(),
            backup_cache_ttl_secs: 0,
        }
    }

    /// Returns the storage acquire timeout as a [`Duration`].
    #[must_use]
    pub const fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database_acquire_timeout_secs)
    }

    /// Returns the SQLite busy timeout as a [`Duration`].
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.database_busy_timeout_ms)
    }

    /// Returns the per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the backup scan cache lifetime, or `None` when caching is
    /// disabled.
    #[must_use]
    pub const fn backup_cache_ttl(&self) -> Option<Duration> {
        if self.backup_cache_ttl_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.backup_cache_ttl_secs))
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

/// Parses a raw setting, falling back to `default` when it is absent or
/// does not parse.
fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_paths_uses_fixed_backup_pattern() {
        let config = GatewayConfig::with_paths("/tmp/x/app.db", "/tmp/backups");
        assert_eq!(config.backup_pattern, "app-*.db");
        assert_eq!(config.db_path, PathBuf::from("/tmp/x/app.db"));
        assert_eq!(config.backup_dir, PathBuf::from("/tmp/backups"));
    }

    #[test]
    fn zero_ttl_disables_backup_cache() {
        let mut config = GatewayConfig::with_paths("a.db", "b");
        assert!(config.backup_cache_ttl().is_none());
        config.backup_cache_ttl_secs = 30;
        assert_eq!(config.backup_cache_ttl(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: u32 = parse_env("EVENTLOG_GATEWAY_SURELY_UNSET_KEY", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn unparseable_values_fall_back_to_default() {
        assert_eq!(parse_or::<u32>(Some("not-a-number"), 5), 5);
        assert_eq!(parse_or::<u64>(Some("-3"), 10), 10);
        assert_eq!(parse_or::<u64>(Some(""), 7), 7);
    }

    #[test]
    fn valid_values_override_default() {
        assert_eq!(parse_or::<u32>(Some("12"), 5), 12);
        assert_eq!(parse_or::<u64>(Some(" 30 "), 0), 30);
    }
}
