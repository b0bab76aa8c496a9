use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::server::handlers::{ask, health};
use crate::state::AppState;

/// Creates the application router: the query form at the root, health
/// endpoints, and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ask::show_form).post(ask::submit))
        .route("/health", get(health::health))
        .route("/api/status", get(health::get_status))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
