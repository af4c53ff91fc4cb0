use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// A general purpose HTTP error type that can be converted into an `IntoResponse`.
///
/// Rendered as a small HTML page since the gallery is browsed with a browser.
pub struct HTTPError {
    status: StatusCode,
    message: String,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HTTPError {
            status,
            message: message.into(),
        }
    }
}

/// Converts our `HTTPError` into an HTTP response.
impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        let reason = self.status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>{code} {reason}</title></head>\n<body>\n<h1>{code} {reason}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to the gallery</a></p>\n</body>\n</html>\n",
            code = self.status.as_u16(),
            reason = reason,
            message = html_escape(&self.message),
        );
        (self.status, Html(body)).into_response()
    }
}

/// Builds the `302 Found` redirect used after a successful form post.
pub fn redirect_found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Escapes text for use inside HTML element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
