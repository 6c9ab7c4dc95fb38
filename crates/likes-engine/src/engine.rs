use std::time::Instant;

use likes_store::{InMemoryRecordStore, RecordStore};
use likes_types::{Like, LikeQuery, LikesQuery, LikesSummary, RefType};
use tracing::debug;

use crate::context::CallContext;
use crate::error::{QueryError, QueryResult};
use crate::matcher::{matches_id, matches_ref_type};
use crate::sink::LikeSink;

// ---------------------------------------------------------------------------
// QueryEngine
// ---------------------------------------------------------------------------

/// Answers point, enumeration, and summary queries over a read-only store.
///
/// The engine owns its store for its whole lifetime. All scans run in store
/// order, so results are deterministic: when ids are not unique the first
/// record in store order wins a point lookup.
pub struct QueryEngine<S = InMemoryRecordStore> {
    store: S,
}

impl<S: RecordStore> QueryEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every like whose composite key equals `ref_type`, in store order.
    pub fn matching<'a>(&'a self, ref_type: &'a RefType) -> impl Iterator<Item = &'a Like> + 'a {
        self.store
            .records()
            .iter()
            .filter(move |like| matches_ref_type(like, ref_type))
    }

    /// Return the first like whose identifier equals `query.id`.
    pub fn get_like(&self, query: &LikeQuery) -> QueryResult<&Like> {
        let found = self
            .store
            .records()
            .iter()
            .find(|like| matches_id(like, &query.id));
        debug!(id = %query.id, found = found.is_some(), "get_like");
        found.ok_or_else(|| QueryError::NotFound(format!("like {:?} was not found", query.id)))
    }

    /// Send every matching like to `sink`, one at a time, in store order.
    ///
    /// Each like is handed over before the scan moves on. The scan stops at
    /// the first failed send, cancellation, or expired deadline, and that
    /// outcome is returned; likes already sent stay sent. Returns the number
    /// of likes delivered.
    pub async fn list_likes<K>(
        &self,
        query: &LikesQuery,
        sink: &mut K,
        ctx: &CallContext,
    ) -> QueryResult<usize>
    where
        K: LikeSink + ?Sized,
    {
        let ref_type = require_ref_type(query)?;
        let mut sent = 0;
        for like in self.matching(ref_type) {
            ctx.check()?;
            ctx.run(sink.send(like)).await??;
            sent += 1;
        }
        debug!(ref_type = %ref_type, sent, "list_likes complete");
        Ok(sent)
    }

    /// Collect the matching likes and their tally in a single pass.
    ///
    /// `elapsed` covers the pass only.
    pub fn get_likes_summary(&self, query: &LikesQuery) -> QueryResult<LikesSummary> {
        let ref_type = require_ref_type(query)?;
        let start = Instant::now();
        let mut likes = Vec::new();
        let mut total = 0i64;
        for like in self.matching(ref_type) {
            total += like.vote();
            likes.push(like.clone());
        }
        let elapsed = start.elapsed();
        debug!(ref_type = %ref_type, matches = likes.len(), total, ?elapsed, "get_likes_summary");
        Ok(LikesSummary {
            likes,
            total,
            elapsed,
        })
    }
}

/// The composite key of a filter query, or `InvalidArgument` if it is absent.
pub fn require_ref_type(query: &LikesQuery) -> QueryResult<&RefType> {
    query
        .ref_type
        .as_ref()
        .ok_or_else(|| QueryError::InvalidArgument("query is missing refType".into()))
}

impl<S: RecordStore> std::fmt::Debug for QueryEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("record_count", &self.store.len())
            .finish()
    }
}
