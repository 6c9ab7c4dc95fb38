use serde::{Deserialize, Serialize};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const GET_LIKE: &str = "/v1/likes/get";
    pub const LIST_LIKES: &str = "/v1/likes/list";
    pub const GET_LIKES_SUMMARY: &str = "/v1/likes/summary";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
}

/// Content type of a streamed enumeration body.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub protocol_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: super::frame::PROTOCOL_VERSION,
        }
    }
}

/// Service description.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol_version: u32,
    pub record_count: usize,
    /// Enumerations whose scan is still running.
    pub active_streams: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert_eq!(h.protocol_version, 1);
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::HEALTH, "/v1/health");
        assert_eq!(endpoints::GET_LIKE, "/v1/likes/get");
        assert_eq!(endpoints::LIST_LIKES, "/v1/likes/list");
        assert_eq!(endpoints::GET_LIKES_SUMMARY, "/v1/likes/summary");
    }
}
