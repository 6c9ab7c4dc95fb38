use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use likes_store::LoadPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration. Every field has a default, so a TOML file only
/// needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON array of likes loaded at startup.
    pub db_file: PathBuf,
    pub load_policy: LoadPolicy,
    /// Likes buffered between the scan and a slow client.
    pub stream_buffer: usize,
    /// Deadline for a streamed enumeration, in seconds. Must be at least 1;
    /// [`ServerConfig::validate`] rejects 0.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 10000)),
            db_file: PathBuf::from("testdata/beer_likes_db.json"),
            load_policy: LoadPolicy::BestEffort,
            stream_buffer: 16,
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Reject settings under which no stream could complete.
    pub fn validate(&self) -> ServerResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
