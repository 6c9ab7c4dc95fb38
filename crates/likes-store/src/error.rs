use std::path::PathBuf;

/// Errors from loading the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a JSON array of likes.
    #[error("malformed record source: {0}")]
    Malformed(String),

    /// Two records share an identifier.
    #[error("duplicate like id: {0:?}")]
    DuplicateId(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
