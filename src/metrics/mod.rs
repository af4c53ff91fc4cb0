//! Metrics collection and exposition for Prometheus.
//!
//! This module provides the per-process request counter and the middleware
//! that feeds it.

mod middleware;
mod recorder;

pub use middleware::track_requests;
pub use recorder::{Metrics, MetricsRecorder, EXPOSITION_CONTENT_TYPE};
