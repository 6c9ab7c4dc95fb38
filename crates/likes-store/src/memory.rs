use std::collections::HashSet;

use likes_types::Like;

use crate::traits::RecordStore;

/// In-memory, `Vec`-backed record store.
///
/// Holds the records exactly as loaded. There is no interior mutability; the
/// store can be shared across tasks behind an `Arc` without locking.
pub struct InMemoryRecordStore {
    records: Vec<Like>,
}

impl InMemoryRecordStore {
    /// Create a store over already-loaded records, keeping their order.
    pub fn new(records: Vec<Like>) -> Self {
        Self { records }
    }

    /// Create a store with no records.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Identifiers that occur more than once, each reported once, in the
    /// order their second occurrence appears.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.records.len());
        let mut reported = HashSet::new();
        let mut dups = Vec::new();
        for like in &self.records {
            if !seen.insert(like.id.as_str()) && reported.insert(like.id.as_str()) {
                dups.push(like.id.as_str());
            }
        }
        dups
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Like>> for InMemoryRecordStore {
    fn from(records: Vec<Like>) -> Self {
        Self::new(records)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn records(&self) -> &[Like] {
        &self.records
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &self.records.len())
            .finish()
    }
}
