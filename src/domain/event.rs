//! Immutable log entries and their timestamp encoding.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use super::EventId;

/// Message stored when the caller supplies none.
pub const DEFAULT_MESSAGE: &str = "hello";

/// A single persisted log entry.
///
/// Created only by [`crate::persistence::EventStore::append`] and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Store-assigned identifier.
    pub id: EventId,
    /// UTC instant recorded at append time.
    pub timestamp: DateTime<Utc>,
    /// Free-form message text.
    pub message: String,
}

impl Event {
    /// Returns the timestamp in its wire/storage text form.
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

/// Current UTC time truncated to the precision that survives storage.
#[must_use]
pub fn now_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Formats an instant as ISO-8601 with microseconds and a trailing `Z`,
/// e.g. `2024-05-01T08:30:00.123456Z`.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a stored timestamp. Accepts any RFC 3339 text, so rows written
/// without a fractional part are still readable.
///
/// # Errors
///
/// Returns the underlying [`chrono::ParseError`] when the text is not
/// valid RFC 3339.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_has_micros_and_z_suffix() {
        let Some(ts) = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).single() else {
            panic!("valid date");
        };
        assert_eq!(format_timestamp(&ts), "2024-05-01T08:30:00.000000Z");
    }

    #[test]
    fn parse_accepts_text_without_fraction() {
        let Ok(ts) = parse_timestamp("2024-05-01T08:30:00Z") else {
            panic!("should parse");
        };
        assert_eq!(format_timestamp(&ts), "2024-05-01T08:30:00.000000Z");
    }

    #[test]
    fn now_survives_text_encoding() {
        let now = now_timestamp();
        let Ok(parsed) = parse_timestamp(&format_timestamp(&now)) else {
            panic!("should parse");
        };
        assert_eq!(parsed, now);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
