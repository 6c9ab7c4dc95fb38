use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{QueryError, QueryResult};

/// Per-call cancellation and deadline.
///
/// Streaming operations consult the context between emissions and while
/// waiting on a slow consumer. Cancellation and deadline expiry are reported
/// as [`QueryError::Cancelled`] and [`QueryError::DeadlineExceeded`].
#[derive(Clone, Debug, Default)]
pub struct CallContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context cancelled through `token`.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: token,
            deadline: None,
        }
    }

    /// Set the deadline to `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail if the call has been cancelled or its deadline has passed.
    pub fn check(&self) -> QueryResult<()> {
        if self.cancel.is_cancelled() {
            return Err(QueryError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(QueryError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Drive `fut` to completion unless the call is cancelled or times out
    /// first. Cancellation wins ties.
    pub async fn run<F: Future>(&self, fut: F) -> QueryResult<F::Output> {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(QueryError::Cancelled),
            _ = deadline => Err(QueryError::DeadlineExceeded),
            out = fut => Ok(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_passes() {
        assert!(CallContext::new().check().is_ok());
        assert!(CallContext::new().deadline().is_none());
    }

    #[test]
    fn cancelled_context_fails() {
        let token = CancellationToken::new();
        let ctx = CallContext::with_cancellation(token.clone());
        token.cancel();
        assert_eq!(ctx.check(), Err(QueryError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_expires() {
        let ctx = CallContext::new().with_timeout(Duration::from_secs(5));
        assert!(ctx.check().is_ok());
        tokio::time::advance(Duration::from_secs(6)).await;
        assert_eq!(ctx.check(), Err(QueryError::DeadlineExceeded));
    }

    #[tokio::test(start_paused = true)]
    async fn run_times_out_pending_future() {
        let ctx = CallContext::new().with_timeout(Duration::from_millis(50));
        let out = ctx.run(std::future::pending::<()>()).await;
        assert_eq!(out, Err(QueryError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn run_observes_cancellation() {
        let token = CancellationToken::new();
        let ctx = CallContext::with_cancellation(token.clone());
        token.cancel();
        let out = ctx.run(async { 1 }).await;
        assert_eq!(out, Err(QueryError::Cancelled));
    }

    #[tokio::test]
    async fn run_returns_output() {
        assert_eq!(CallContext::new().run(async { 7 }).await, Ok(7));
    }
}
