//! HTTP front end for the CNOL badge generator.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::trace::TraceLayer;

/// Route serving badge PDFs. Only `POST` is routed; other methods get a
/// 405 with an `Allow` header.
pub const BADGE_ROUTE: &str = "/api/generatedbadge";

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_request_bytes();

    Router::new()
        .route("/health", get(api::health_check))
        .route(
            BADGE_ROUTE,
            post(api::generate_badge).layer(DefaultBodyLimit::max(body_limit)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
