use std::sync::Arc;
use std::time::Duration;

use likes_engine::QueryEngine;
use tokio_util::task::TaskTracker;

use crate::config::ServerConfig;

/// Shared per-router state. Cloned into every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
    pub stream_buffer: usize,
    pub request_timeout: Duration,
    /// Scan tasks spawned for streamed enumerations.
    pub streams: TaskTracker,
}

impl AppState {
    pub fn new(engine: Arc<QueryEngine>, config: &ServerConfig) -> Self {
        Self {
            engine,
            stream_buffer: config.stream_buffer,
            request_timeout: config.request_timeout(),
            streams: TaskTracker::new(),
        }
    }
}
