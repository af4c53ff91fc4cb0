//! Error taxonomy shared by the store, the handlers and the router.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::utils::http_helpers::HTTPError;

/// Every failure a request can surface to the client.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The backing store could not be reached or refused the operation.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The upload request carried no usable file part.
    #[error("missing upload: {0}")]
    MissingUpload(String),

    /// The request body exceeded the configured upload limit.
    #[error("upload too large: {0}")]
    UploadTooLarge(String),

    /// Nothing is registered or stored under the requested path.
    #[error("no route for {0}")]
    RouteNotFound(String),
}

impl GalleryError {
    pub fn status(&self) -> StatusCode {
        match self {
            GalleryError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GalleryError::MissingUpload(_) => StatusCode::BAD_REQUEST,
            GalleryError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GalleryError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            GalleryError::StorageUnavailable(cause) => {
                // The cause stays in the logs; clients get a generic page.
                tracing::error!(error = %cause, "Storage unavailable");
                "Something went wrong while talking to the image store.".to_string()
            }
            GalleryError::MissingUpload(reason) => {
                tracing::debug!(reason = %reason, "Rejected upload");
                format!("No image was uploaded: {}", reason)
            }
            GalleryError::UploadTooLarge(reason) => format!("The upload is too large: {}", reason),
            GalleryError::RouteNotFound(path) => format!("Nothing found at {}", path),
        };
        HTTPError::new(status, message).into_response()
    }
}
