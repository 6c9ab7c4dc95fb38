use likes_types::{ErrorCode, Like};
use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: u32 = 1;
pub const MAX_FRAME_SIZE: usize = 1024 * 1024;

/// JSON error body returned by every endpoint, and carried in-band by a
/// stream that fails after it has started.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// One line of a streamed enumeration.
///
/// A stream is zero or more `Like` frames, optionally followed by one `Error`
/// frame. Normal completion has no trailer; the body simply ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamFrame {
    Like(Like),
    Error(ErrorBody),
}
