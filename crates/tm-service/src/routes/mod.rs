use crate::handlers::token_handler::{self, AppState};
use crate::middleware::auth;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Install the process-global Prometheus recorder.
///
/// Fails if a recorder is already installed (tests that share a process
/// fall back to a standalone recorder instead).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    Router::new()
        // Token mint endpoint
        .route("/api/v1/token", post(token_handler::handle_mint_token))

        // Health check
        .route("/health", get(health_check))

        // Prometheus exposition
        .route(
            "/metrics",
            get(move || {
                let handle = metrics_handle.clone();
                async move { handle.render() }
            }),
        )

        // Lift the platform identity header into a typed extension
        .layer(from_fn(auth::attach_identity))

        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
