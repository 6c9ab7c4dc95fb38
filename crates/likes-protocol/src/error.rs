use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },

    #[error("stream ended inside a frame ({0} bytes buffered)")]
    TruncatedFrame(usize),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
