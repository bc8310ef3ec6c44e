//! Type-safe event identifier.
//!
//! [`EventId`] is a newtype wrapper around the storage row id so that event
//! identifiers cannot be confused with counts or limits.

use std::fmt;

use serde::Serialize;

/// Identifier of a persisted event.
///
/// Assigned by the store on append from an auto-incrementing column.
/// Strictly increasing and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Wraps a raw storage row id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_raw_id() {
        assert!(EventId::new(1) < EventId::new(2));
        assert_eq!(EventId::new(7).get(), 7);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&EventId::new(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));
    }

    #[test]
    fn display_is_raw_id() {
        assert_eq!(format!("{}", EventId::new(13)), "13");
    }
}
