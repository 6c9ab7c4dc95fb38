//! Foundation types for the likes service.
//!
//! This crate provides the record, key, query, and result types shared by
//! every other `likes-*` crate. All types are plain values with serde support
//! so they can cross the wire unchanged.
//!
//! # Key Types
//!
//! - [`Like`] — A single vote: identifier, composite key, and liked flag
//! - [`RefType`] — Composite `{name, id}` key that groups likes
//! - [`LikeQuery`] — Point query selecting at most one like by identifier
//! - [`LikesQuery`] — Filter query selecting likes by composite key
//! - [`LikesSummary`] — Aggregate of a filter query: matches, tally, elapsed time
//! - [`ErrorCode`] — Request-scoped error classification shared by server and client

pub mod code;
pub mod error;
pub mod like;
pub mod query;
pub mod summary;

pub use code::ErrorCode;
pub use error::TypeError;
pub use like::{Like, RefType};
pub use query::{LikeQuery, LikesQuery};
pub use summary::LikesSummary;
