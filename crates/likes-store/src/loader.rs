use std::path::Path;

use likes_types::Like;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::memory::InMemoryRecordStore;
use crate::traits::RecordStore;

/// What to do when the record source cannot be used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Unreadable or malformed sources and duplicate ids are errors.
    Strict,
    /// Failures are logged and the store comes up empty. Duplicate ids are
    /// logged and kept; lookups return the first one in store order.
    #[default]
    BestEffort,
}

/// Decode a JSON array of likes, preserving array order.
pub fn load_records(bytes: &[u8]) -> StoreResult<Vec<Like>> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Malformed(e.to_string()))
}

/// Load a store from a JSON file under the given policy.
pub fn load_from_path(path: impl AsRef<Path>, policy: LoadPolicy) -> StoreResult<InMemoryRecordStore> {
    let path = path.as_ref();
    let store = match read_file(path) {
        Ok(store) => store,
        Err(e) if policy == LoadPolicy::BestEffort => {
            warn!("failed to load likes from {}: {}", path.display(), e);
            return Ok(InMemoryRecordStore::empty());
        }
        Err(e) => return Err(e),
    };

    let dups = store.duplicate_ids();
    if let Some(first) = dups.first() {
        match policy {
            LoadPolicy::Strict => return Err(StoreError::DuplicateId(first.to_string())),
            LoadPolicy::BestEffort => {
                for id in &dups {
                    warn!(id = %id, "duplicate like id; first occurrence wins");
                }
            }
        }
    }

    info!("loaded {} likes from {}", store.len(), path.display());
    Ok(store)
}

fn read_file(path: &Path) -> StoreResult<InMemoryRecordStore> {
    let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(InMemoryRecordStore::new(load_records(&bytes)?))
}
