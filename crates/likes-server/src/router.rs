use axum::routing::{get, post};
use axum::Router;
use likes_protocol::endpoints;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(endpoints::GET_LIKE, post(handler::get_like_handler))
        .route(endpoints::LIST_LIKES, post(handler::list_likes_handler))
        .route(endpoints::GET_LIKES_SUMMARY, post(handler::get_likes_summary_handler))
        .fallback(handler::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
