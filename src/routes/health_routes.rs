//! Liveness probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Router};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Answers `OK` while the process is serving. The store is not queried.
async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    tracing::trace!(store = state.store.name(), "Health check");
    (StatusCode::OK, "OK")
}
