use std::future::Future;
use std::sync::Arc;

use likes_engine::QueryEngine;
use likes_store::{load_from_path, InMemoryRecordStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::state::AppState;

/// Likes query server.
///
/// Owns the query engine for the lifetime of the process; nothing about the
/// loaded records lives in global state.
pub struct LikesServer {
    config: ServerConfig,
    engine: Arc<QueryEngine>,
}

impl LikesServer {
    /// Validate `config`, load the store named by `config.db_file` under
    /// `config.load_policy`, and build the engine over it.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        config.validate()?;
        let store = load_from_path(&config.db_file, config.load_policy)?;
        Ok(Self::with_store(config, store))
    }

    /// Build a server over records that are already loaded.
    pub fn with_store(config: ServerConfig, store: InMemoryRecordStore) -> Self {
        Self {
            config,
            engine: Arc::new(QueryEngine::new(store)),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn engine(&self) -> &Arc<QueryEngine> {
        &self.engine
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.engine.clone(), &self.config))
    }

    /// Bind `config.bind_addr` and serve until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        tracing::info!("likes server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("likes server stopped");
        Ok(())
    }
}
