//! Query and aggregation engine for the likes service.
//!
//! [`QueryEngine`] owns a read-only [`RecordStore`](likes_store::RecordStore)
//! and answers three kinds of request:
//!
//! - [`QueryEngine::get_like`] — point lookup by identifier
//! - [`QueryEngine::list_likes`] — filtered enumeration, delivered one like at
//!   a time to a [`LikeSink`]
//! - [`QueryEngine::get_likes_summary`] — filtered aggregate with a signed
//!   tally and the elapsed time of the matching pass
//!
//! No operation mutates the store, so any number of calls may run at once.
//! Every failure is a request-scoped [`QueryError`]; an empty result set is a
//! success.

pub mod context;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod sink;

pub use context::CallContext;
pub use engine::{require_ref_type, QueryEngine};
pub use error::{QueryError, QueryResult};
pub use sink::{ChannelSink, LikeSink, SinkError};
