//! Data Transfer Objects for REST request/response serialization.
//!
//! Timestamps are serialized as RFC 3339 strings in UTC.

pub mod event_dto;
pub mod race_dto;

pub use event_dto::*;
pub use race_dto::*;
