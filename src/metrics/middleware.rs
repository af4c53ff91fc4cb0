//! Request-counting middleware.

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::{Metrics, MetricsRecorder};

/// Counts every response by method, route and status.
///
/// Must be installed with `Router::layer` after all routes and the fallback so
/// that `MatchedPath` is populated for matched routes. Unmatched requests are
/// labelled with their raw path.
///
/// The count is taken once the inner service has produced the response, before
/// its body is written; a client that disconnects mid-body is still counted.
pub async fn track_requests(
    State(metrics): State<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;

    metrics.record_request(&method, &route, response.status().as_u16());
    response
}
