//! HTTP layer: route handlers and router composition.
//!
//! One fallback route renders the page for any path; `/health` reports
//! service status.

pub mod handlers;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// Builds the complete router.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .fallback(get(handlers::page_handler))
}
