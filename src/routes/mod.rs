//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! the gallery page, uploads, metrics exposition, health checks and the
//! static-file fallback.

mod gallery_routes;
mod health_routes;
mod metrics_routes;
mod static_routes;
mod upload_routes;

pub use upload_routes::FALLBACK_CONTENT_TYPE;

use crate::metrics::track_requests;
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

/// Creates the application router with all configured routes.
///
/// Every route, including the fallback, is wrapped by the request counter;
/// it has to be layered after the fallback is installed.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(gallery_routes::routes())
        .merge(upload_routes::routes(state.config.upload.max_bytes))
        .merge(metrics_routes::routes())
        .merge(health_routes::routes());

    static_routes::with_static_fallback(router, &state.config.uploads.directory)
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            track_requests,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
