use likes_protocol::{ErrorBody, ProtocolError};
use likes_types::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error, either as a status or in-band.
    #[error("{}: {}", .0.code, .0.message)]
    Remote(ErrorBody),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl ClientError {
    /// The server's classification, if the server produced this error.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Remote(body) => Some(body.code),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
