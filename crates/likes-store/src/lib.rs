//! Read-only record storage for the likes service.
//!
//! The store is populated once, at startup, from an external JSON source and
//! is never mutated afterwards. Query code only ever sees it through the
//! [`RecordStore`] trait.
//!
//! # Design Rules
//!
//! 1. Records are immutable once loaded.
//! 2. Store order is the order of the source array and is preserved.
//! 3. Concurrent reads need no synchronization.
//! 4. An empty store is valid; it is not an error condition.
//! 5. What happens when the source is unreadable is decided by [`LoadPolicy`].

pub mod error;
pub mod loader;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use loader::{load_from_path, load_records, LoadPolicy};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;
