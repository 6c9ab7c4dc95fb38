use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a failed request.
///
/// Every failure a caller can observe carries exactly one code. An empty
/// result set is a success and never has a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request failed its required-field constraints.
    InvalidArgument,
    /// A well-formed point query matched no like.
    NotFound,
    /// Delivery of a streamed item failed.
    TransportFailure,
    /// The caller abandoned the call.
    Cancelled,
    /// The call ran past its deadline.
    DeadlineExceeded,
    /// Anything else.
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::TransportFailure => "transport_failure",
            Self::Cancelled => "cancelled",
            Self::DeadlineExceeded => "deadline_exceeded",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
