//! HTTP client for the likes service.
//!
//! [`LikesClient`] mirrors the server's three operations. Enumeration results
//! are decoded frame by frame as the body arrives, and an error frame sent
//! after the stream started is returned as an error rather than a short list.

pub mod client;
pub mod error;

pub use client::LikesClient;
pub use error::{ClientError, ClientResult};
