use async_trait::async_trait;
use likes_types::Like;
use thiserror::Error;
use tokio::sync::mpsc;

/// Failure to hand a like to the consumer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SinkError {
    /// The consumer has gone away.
    #[error("stream receiver closed")]
    Closed,

    #[error("{0}")]
    Other(String),
}

/// Consumer side of a streamed enumeration.
///
/// `send` is called once per match, in store order, and the producer waits
/// for it to complete before continuing its scan. A sink applies backpressure
/// by not completing `send`; it ends the stream early by returning an error,
/// which aborts the scan without retry.
#[async_trait]
pub trait LikeSink: Send {
    async fn send(&mut self, like: &Like) -> Result<(), SinkError>;
}

/// Collects every like in memory.
#[async_trait]
impl LikeSink for Vec<Like> {
    async fn send(&mut self, like: &Like) -> Result<(), SinkError> {
        self.push(like.clone());
        Ok(())
    }
}

/// Forwards likes into a bounded channel.
///
/// A full channel suspends the producer; a dropped receiver fails the send
/// with [`SinkError::Closed`].
pub struct ChannelSink {
    tx: mpsc::Sender<Like>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<Like>) -> Self {
        Self { tx }
    }

    /// Create a sink and its receiver with the given buffer size.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<Like>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl LikeSink for ChannelSink {
    async fn send(&mut self, like: &Like) -> Result<(), SinkError> {
        self.tx.send(like.clone()).await.map_err(|_| SinkError::Closed)
    }
}
