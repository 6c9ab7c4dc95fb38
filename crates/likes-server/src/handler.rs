use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use likes_engine::{require_ref_type, CallContext, ChannelSink, QueryError};
use likes_protocol::{
    ErrorBody, HealthResponse, InfoResponse, LikesCodec, StreamFrame, NDJSON_CONTENT_TYPE,
    PROTOCOL_VERSION,
};
use likes_store::RecordStore;
use likes_types::{ErrorCode, Like, LikeQuery, LikesQuery, LikesSummary};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{error_body, ApiError};
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "likes-server".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        protocol_version: PROTOCOL_VERSION,
        record_count: state.engine.store().len(),
        active_streams: state.streams.len(),
    })
}

/// Point lookup.
pub async fn get_like_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Like>, ApiError> {
    let query: LikeQuery = LikesCodec::decode_request(&body)?;
    let like = state.engine.get_like(&query)?;
    Ok(Json(like.clone()))
}

/// Filtered aggregate.
pub async fn get_likes_summary_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LikesSummary>, ApiError> {
    let query: LikesQuery = LikesCodec::decode_request(&body)?;
    Ok(Json(state.engine.get_likes_summary(&query)?))
}

/// Filtered enumeration, streamed as newline-delimited [`StreamFrame`]s.
///
/// Request errors are answered with a plain error status before streaming
/// starts. Once the first byte is out, a failure can only be reported as a
/// trailing `error` frame.
///
/// The scan runs on its own task and feeds a bounded channel, so a slow
/// client holds the scan back. Dropping the response body cancels the call.
pub async fn list_likes_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query: LikesQuery = LikesCodec::decode_request(&body)?;
    require_ref_type(&query)?;

    let token = CancellationToken::new();
    let ctx = CallContext::with_cancellation(token.clone()).with_timeout(state.request_timeout);
    let (mut sink, mut rx) = ChannelSink::channel(state.stream_buffer);
    let engine = state.engine.clone();
    let scan = state.streams.spawn(async move {
        let outcome = engine.list_likes(&query, &mut sink, &ctx).await;
        match &outcome {
            Ok(sent) => debug!(sent, "list_likes stream finished"),
            Err(e) => warn!(error = %e, "list_likes stream aborted"),
        }
        outcome
    });

    let guard = token.drop_guard();
    let frames = async_stream::stream! {
        let _guard = guard;
        while let Some(like) = rx.recv().await {
            yield LikesCodec::encode_frame(&StreamFrame::Like(like));
        }
        let trailer = match scan.await {
            Ok(Ok(_)) => None,
            Ok(Err(e)) => Some(error_body(&e)),
            Err(e) => Some(ErrorBody::new(ErrorCode::Internal, e.to_string())),
        };
        if let Some(body) = trailer {
            yield LikesCodec::encode_frame(&StreamFrame::Error(body));
        }
    };

    Ok(([(CONTENT_TYPE, NDJSON_CONTENT_TYPE)], Body::from_stream(frames)).into_response())
}

/// Fallback for any path that is not an endpoint.
pub async fn not_found_handler() -> ApiError {
    ApiError::from(QueryError::NotFound("no such endpoint".into()))
}
