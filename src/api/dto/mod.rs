//! Data Transfer Objects for REST request/response serialization.

pub mod event_dto;
pub mod status_dto;

pub use event_dto::*;
pub use status_dto::*;
