use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use likes_engine::QueryError;
use likes_protocol::{ErrorBody, ProtocolError};
use likes_types::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] likes_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// A failed request, rendered as a JSON [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError(pub ErrorBody);

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        self.0.code
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        Self(error_body(&e))
    }
}

/// Undecodable or missing request bodies are the caller's fault.
impl From<ProtocolError> for ApiError {
    fn from(e: ProtocolError) -> Self {
        let code = match e {
            ProtocolError::EmptyBody | ProtocolError::Deserialization(_) => ErrorCode::InvalidArgument,
            _ => ErrorCode::Internal,
        };
        Self(ErrorBody::new(code, e.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (status_for(self.0.code), Json(self.0)).into_response()
    }
}

pub fn error_body(e: &QueryError) -> ErrorBody {
    ErrorBody::new(e.code(), e.to_string())
}

/// HTTP status for an error code. 499 follows the nginx convention for a
/// client that closed the request.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::TransportFailure => StatusCode::BAD_GATEWAY,
        ErrorCode::Cancelled => {
            StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        ErrorCode::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
