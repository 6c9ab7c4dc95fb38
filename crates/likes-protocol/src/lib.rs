//! Wire protocol for the likes service.
//!
//! Defines the endpoint paths, the JSON bodies exchanged for each operation,
//! and the newline-delimited frame format used to stream enumeration results
//! so that a failure after the first item can still reach the client.

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod frame;

pub use codec::{FrameDecoder, LikesCodec};
pub use endpoint::{endpoints, HealthResponse, InfoResponse, NDJSON_CONTENT_TYPE};
pub use error::{ProtocolError, ProtocolResult};
pub use frame::{ErrorBody, StreamFrame, MAX_FRAME_SIZE, PROTOCOL_VERSION};
