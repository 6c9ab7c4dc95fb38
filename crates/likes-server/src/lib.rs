//! HTTP server for the likes service.
//!
//! Exposes the three query operations of [`likes_engine::QueryEngine`] over
//! HTTP. Unary operations answer with a JSON body; enumeration streams one
//! JSON frame per line as matches are found.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use server::LikesServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use futures::StreamExt;
    use likes_protocol::{endpoints, ErrorBody, FrameDecoder, StreamFrame, NDJSON_CONTENT_TYPE};
    use likes_store::InMemoryRecordStore;
    use likes_types::{ErrorCode, Like, LikesSummary, RefType};
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn app() -> axum::Router {
        let store = InMemoryRecordStore::new(vec![
            Like::new("a", RefType::new("beer", "1"), true),
            Like::new("b", RefType::new("beer", "1"), false),
            Like::new("c", RefType::new("beer", "2"), true),
        ]);
        LikesServer::with_store(ServerConfig::default(), store).router()
    }

    async fn call(uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn error_code(bytes: &[u8]) -> ErrorCode {
        serde_json::from_slice::<ErrorBody>(bytes).unwrap().code
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = app()
            .oneshot(Request::builder().uri(endpoints::HEALTH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn info_reports_record_count() {
        let response = app()
            .oneshot(Request::builder().uri(endpoints::INFO).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let info: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(info["record_count"], 3);
        assert_eq!(info["active_streams"], 0);
    }

    #[tokio::test]
    async fn get_like_found() {
        let (status, bytes) = call(endpoints::GET_LIKE, r#"{"id":"b"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let like: Like = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(like, Like::new("b", RefType::new("beer", "1"), false));
    }

    #[tokio::test]
    async fn get_like_not_found() {
        let (status, bytes) = call(endpoints::GET_LIKE, r#"{"id":"123-abc"}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(&bytes), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn get_like_missing_query_is_invalid() {
        let (status, bytes) = call(endpoints::GET_LIKE, "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&bytes), ErrorCode::InvalidArgument);
    }

    #[tokio::test]
    async fn list_likes_streams_frames() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(endpoints::LIST_LIKES)
                    .body(Body::from(r#"{"refType":{"name":"beer","id":"1"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], NDJSON_CONTENT_TYPE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let mut decoder = FrameDecoder::new();
        let frames = decoder.push(&bytes).unwrap();
        decoder.finish().unwrap();
        let ids: Vec<String> = frames
            .into_iter()
            .map(|f| match f {
                StreamFrame::Like(like) => like.id,
                StreamFrame::Error(e) => panic!("unexpected error frame: {e:?}"),
            })
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn list_likes_failure_after_start_is_trailer_frame() {
        let store = InMemoryRecordStore::new(vec![Like::new("a", RefType::new("beer", "1"), true)]);
        let config = ServerConfig {
            request_timeout_secs: 0,
            ..ServerConfig::default()
        };
        let response = LikesServer::with_store(config, store)
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(endpoints::LIST_LIKES)
                    .body(Body::from(r#"{"refType":{"name":"beer","id":"1"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let frames = FrameDecoder::new().push(&bytes).unwrap();
        assert!(matches!(
            frames.last(),
            Some(StreamFrame::Error(ErrorBody { code: ErrorCode::DeadlineExceeded, .. }))
        ));
    }

    #[tokio::test]
    async fn dropping_list_body_stops_the_scan() {
        let likes: Vec<Like> = (0..1000)
            .map(|i| Like::new(i.to_string(), RefType::new("beer", "1"), true))
            .collect();
        let config = ServerConfig {
            stream_buffer: 1,
            ..ServerConfig::default()
        };
        let server = LikesServer::with_store(config.clone(), InMemoryRecordStore::new(likes));
        let state = AppState::new(server.engine().clone(), &config);
        let response = router::build_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(endpoints::LIST_LIKES)
                    .body(Body::from(r#"{"refType":{"name":"beer","id":"1"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let mut body = response.into_body().into_data_stream();
        let first = body.next().await.unwrap().unwrap();
        assert!(first.starts_with(br#"{"like":"#));
        assert_eq!(state.streams.len(), 1);

        drop(body);
        state.streams.close();
        tokio::time::timeout(Duration::from_secs(5), state.streams.wait())
            .await
            .expect("scan kept running after the body was dropped");
    }

    #[tokio::test]
    async fn list_likes_no_matches_is_empty_body() {
        let (status, bytes) =
            call(endpoints::LIST_LIKES, r#"{"refType":{"name":"beer","id":"9"}}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn list_likes_missing_ref_type_is_invalid() {
        let (status, bytes) = call(endpoints::LIST_LIKES, "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&bytes), ErrorCode::InvalidArgument);
    }

    #[tokio::test]
    async fn summary_endpoint() {
        let (status, bytes) =
            call(endpoints::GET_LIKES_SUMMARY, r#"{"refType":{"name":"beer","id":"1"}}"#).await;
        assert_eq!(status, StatusCode::OK);
        let summary: LikesSummary = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(summary.likes.len(), 2);
        assert_eq!(summary.total, 0);
    }

    #[tokio::test]
    async fn summary_missing_ref_type_is_invalid() {
        let (status, _) = call(endpoints::GET_LIKES_SUMMARY, "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_path() {
        let (status, bytes) = call("/v1/nope", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(&bytes), ErrorCode::NotFound);
    }
}
