//! Database row models.

use sqlx::FromRow;

use crate::domain::event::parse_timestamp;
use crate::domain::{Event, EventId};
use crate::error::GatewayError;

/// A stored row from the `events` table.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    /// Auto-increment row ID.
    pub id: i64,
    /// ISO-8601 timestamp text.
    pub ts: String,
    /// Message text.
    pub message: String,
}

impl TryFrom<EventRow> for Event {
    type Error = GatewayError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&row.ts).map_err(|e| {
            GatewayError::StorageRead(format!(
                "event {} has malformed timestamp {:?}: {e}",
                row.id, row.ts
            ))
        })?;
        Ok(Self {
            id: EventId::new(row.id),
            timestamp,
            message: row.message,
        })
    }
}
