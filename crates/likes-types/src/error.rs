use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid ref type '{0}': expected NAME:ID")]
    InvalidRefType(String),
}
