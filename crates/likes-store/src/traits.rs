use likes_types::Like;

/// Read-only, ordered view over loaded likes.
///
/// All implementations must satisfy these invariants:
/// - `records()` returns the same slice, in the same order, for the lifetime
///   of the store.
/// - No method mutates the records.
/// - Concurrent reads are always safe.
pub trait RecordStore: Send + Sync {
    /// All records in store order.
    fn records(&self) -> &[Like];

    /// Number of records held.
    fn len(&self) -> usize {
        self.records().len()
    }

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
