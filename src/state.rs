//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! configuration, the image store and the request counter.

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::store::ImageStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler and contains
/// references to the configuration, image store and metrics.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Gateway to every stored image.
    pub store: Arc<dyn ImageStore>,
    /// Per-process request counter, also read by `/metrics`.
    pub metrics: Metrics,
}
