use likes_types::ErrorCode;
use thiserror::Error;

use crate::sink::SinkError;

/// Errors returned by query operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("call cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl QueryError {
    /// Wire classification of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::TransportFailure(_) => ErrorCode::TransportFailure,
            Self::Cancelled => ErrorCode::Cancelled,
            Self::DeadlineExceeded => ErrorCode::DeadlineExceeded,
        }
    }
}

impl From<SinkError> for QueryError {
    fn from(e: SinkError) -> Self {
        Self::TransportFailure(e.to_string())
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
