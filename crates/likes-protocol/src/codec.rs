use bytes::{Buf, Bytes, BytesMut};
use serde::de::DeserializeOwned;

use crate::error::{ProtocolError, ProtocolResult};
use crate::frame::{StreamFrame, MAX_FRAME_SIZE};

/// Codec for request bodies and streamed frames.
pub struct LikesCodec;

impl LikesCodec {
    /// Encode a frame as one JSON line: `<json>\n`.
    pub fn encode_frame(frame: &StreamFrame) -> ProtocolResult<Bytes> {
        let mut line =
            serde_json::to_vec(frame).map_err(|e| ProtocolError::Serialization(e.to_string()))?;
        if line.len() > MAX_FRAME_SIZE {
            return Err(ProtocolError::FrameTooLarge {
                size: line.len(),
                max: MAX_FRAME_SIZE,
            });
        }
        line.push(b'\n');
        Ok(Bytes::from(line))
    }

    /// Decode a single frame line (without the trailing newline).
    pub fn decode_frame(line: &[u8]) -> ProtocolResult<StreamFrame> {
        serde_json::from_slice(line).map_err(|e| ProtocolError::Deserialization(e.to_string()))
    }

    /// Decode a JSON request body. An empty or all-whitespace body is
    /// [`ProtocolError::EmptyBody`], distinct from a malformed one.
    pub fn decode_request<T: DeserializeOwned>(body: &[u8]) -> ProtocolResult<T> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ProtocolError::EmptyBody);
        }
        serde_json::from_slice(body).map_err(|e| ProtocolError::Deserialization(e.to_string()))
    }
}

/// Incremental decoder for a streamed body.
///
/// Chunks may split frames at any byte; complete frames are returned as soon
/// as their terminating newline arrives.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buf: BytesMut,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every frame it completes.
    pub fn push(&mut self, chunk: &[u8]) -> ProtocolResult<Vec<StreamFrame>> {
        self.buf.extend_from_slice(chunk);
        let mut frames = Vec::new();
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line = self.buf.split_to(pos);
            self.buf.advance(1);
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            frames.push(LikesCodec::decode_frame(&line)?);
        }
        if self.buf.len() > MAX_FRAME_SIZE {
            return Err(ProtocolError::FrameTooLarge {
                size: self.buf.len(),
                max: MAX_FRAME_SIZE,
            });
        }
        Ok(frames)
    }

    /// Signal end of stream. Fails if a partial frame is still buffered.
    pub fn finish(self) -> ProtocolResult<()> {
        if self.buf.iter().all(u8::is_ascii_whitespace) {
            Ok(())
        } else {
            Err(ProtocolError::TruncatedFrame(self.buf.len()))
        }
    }
}
