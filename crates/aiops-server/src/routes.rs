//! Route configuration for the processor API.

use std::sync::Arc;

use axum::routing::{get, post, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{alertmanager_webhook, analyze_manual, health, metrics_exposition, root};
use crate::state::AppState;

/// Create the processor API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics_exposition))
        .route("/webhook/alertmanager", post(alertmanager_webhook))
        .route("/analyze", post(analyze_manual))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
