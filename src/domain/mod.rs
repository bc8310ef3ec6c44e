//! Domain layer: events, backup artifacts, and status snapshots.
//!
//! Plain data types and the pure rules that operate on them (timestamp
//! encoding, latest-backup selection, age computation). No I/O lives here.

pub mod backup;
pub mod event;
pub mod event_id;
pub mod status;

pub use backup::BackupFile;
pub use event::{DEFAULT_MESSAGE, Event};
pub use event_id::EventId;
pub use status::{BackupFreshness, EventCount, StatusSnapshot};
