//! SQLite implementation of the append-only event store.

use std::path::{Path, PathBuf};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use super::models::EventRow;
use crate::config::GatewayConfig;
use crate::domain::event::{format_timestamp, now_timestamp};
use crate::domain::{Event, EventId};
use crate::error::GatewayError;

const CREATE_EVENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS events (\
     id INTEGER PRIMARY KEY AUTOINCREMENT, \
     ts TEXT NOT NULL, \
     message TEXT NOT NULL)";

/// Durable, append-only event log backed by a single SQLite file.
///
/// Holds one long-lived connection pool for the whole process. The pool
/// connects lazily, so constructing a store performs no I/O; call
/// [`EventStore::initialize`] to create the directory and schema. Write
/// serialization is left to SQLite's own locking (WAL journal plus a busy
/// timeout).
#[derive(Debug, Clone)]
pub struct EventStore {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl EventStore {
    /// Creates a store for the file at `config.db_path`.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(&config.db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(config.busy_timeout());

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections.max(1))
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        Self {
            pool,
            db_path: config.db_path.clone(),
        }
    }

    /// Returns the storage file path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Ensures the storage directory and the `events` table exist.
    ///
    /// Idempotent; safe to call before every operation. The directory is
    /// created before any file is opened, so a failure there leaves
    /// nothing behind.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] if the directory cannot
    /// be created or the database cannot be opened.
    pub async fn initialize(&self) -> Result<(), GatewayError> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                GatewayError::StorageUnavailable(format!("{}: {e}", parent.display()))
            })?;
        }

        sqlx::query(CREATE_EVENTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                GatewayError::StorageUnavailable(format!("{}: {e}", self.db_path.display()))
            })?;

        Ok(())
    }

    /// Appends an event stamped with the current UTC time.
    ///
    /// Runs as a single statement, so a failed append leaves no row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageWrite`] on database failure.
    pub async fn append(&self, message: &str) -> Result<Event, GatewayError> {
        let timestamp = now_timestamp();

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO events (ts, message) VALUES (?, ?) RETURNING id",
        )
        .bind(format_timestamp(&timestamp))
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::StorageWrite(e.to_string()))?;

        tracing::debug!(id, "event appended");

        Ok(Event {
            id: EventId::new(id),
            timestamp,
            message: message.to_string(),
        })
    }

    /// Returns up to `limit` most recent events, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageRead`] on database failure or when a
    /// stored timestamp cannot be parsed.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<Event>, GatewayError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, ts, message FROM events ORDER BY id DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::StorageRead(e.to_string()))?;

        rows.into_iter().map(Event::try_from).collect()
    }

    /// Returns the total number of stored events.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageRead`] on database failure.
    pub async fn count(&self) -> Result<i64, GatewayError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::StorageRead(e.to_string()))
    }

    /// Closes every pooled connection. Further operations fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
