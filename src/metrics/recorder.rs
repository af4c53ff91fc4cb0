//! Metrics recording implementation using Prometheus.

use prometheus::core::Collector;
use prometheus::{
    register_int_counter_vec_with_registry, Encoder, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Content type of the Prometheus text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records one completed HTTP response.
    ///
    /// `route` is the matched route pattern, or the raw path when no route matched.
    fn record_request(&self, method: &str, route: &str, status_code: u16);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    // HTTP metrics
    http_requests_total: IntCounterVec,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics instance with its own Prometheus registry.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());

        let http_requests_total = register_int_counter_vec_with_registry!(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "route", "status_code"],
            registry.clone()
        )
        .expect("Failed to register http_requests_total");

        Metrics {
            registry,
            http_requests_total,
        }
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Current count for one label combination, zero if never recorded.
    ///
    /// Reads the collected samples so that looking up an unseen combination
    /// does not add it to the exposition.
    pub fn request_count(&self, method: &str, route: &str, status_code: u16) -> u64 {
        let status = status_code.to_string();
        let wanted = [("method", method), ("route", route), ("status_code", status.as_str())];

        self.http_requests_total
            .collect()
            .iter()
            .flat_map(|family| family.get_metric())
            .find(|metric| {
                let labels = metric.get_label();
                wanted.iter().all(|(name, value)| {
                    labels
                        .iter()
                        .any(|pair| pair.get_name() == *name && pair.get_value() == *value)
                })
            })
            .map(|metric| metric.get_counter().get_value() as u64)
            .unwrap_or(0)
    }
}

impl MetricsRecorder for Metrics {
    fn record_request(&self, method: &str, route: &str, status_code: u16) {
        let status = status_code.to_string();
        self.http_requests_total
            .with_label_values(&[method, route, &status])
            .inc();
    }
}
