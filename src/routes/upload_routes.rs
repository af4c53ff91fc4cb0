//! Upload ingest: one multipart file part into the image store.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::{routing::post, Router};
use tracing::info;

use crate::error::GalleryError;
use crate::state::AppState;
use crate::utils::http_helpers::redirect_found;
use crate::views::UPLOAD_FIELD;

/// MIME type recorded when the client declares none for the file part,
/// the multipart/form-data default (RFC 7578, section 4.4).
pub const FALLBACK_CONTENT_TYPE: &str = "text/plain";

/// Registers the upload route with its body limit.
pub fn routes(max_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload).layer(DefaultBodyLimit::max(max_bytes)),
    )
}

/// Stores the uploaded file and sends the browser back to the gallery.
async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, GalleryError> {
    let multipart = multipart.map_err(|e| GalleryError::MissingUpload(e.body_text()))?;
    let (data, content_type) = read_upload_field(multipart).await?;
    let size = data.len();

    let id = state.store.insert(data, &content_type).await?;
    info!(id = %id, bytes = size, content_type = %content_type, "Stored uploaded image");

    Ok(redirect_found("/"))
}

/// Buffers the first file part named `photo` into memory.
///
/// Returns the bytes together with the part's declared content type, taken
/// verbatim from the client.
async fn read_upload_field(mut multipart: Multipart) -> Result<(Vec<u8>, String), GalleryError> {
    while let Some(field) = multipart.next_field().await.map_err(from_multipart_error)? {
        let is_file = field.file_name().is_some_and(|name| !name.is_empty());
        if field.name() != Some(UPLOAD_FIELD) || !is_file {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let data = field.bytes().await.map_err(from_multipart_error)?;
        return Ok((data.to_vec(), content_type));
    }

    Err(GalleryError::MissingUpload(format!(
        "expected a file in the '{}' field",
        UPLOAD_FIELD
    )))
}

fn from_multipart_error(e: MultipartError) -> GalleryError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GalleryError::UploadTooLarge(e.body_text())
    } else {
        GalleryError::MissingUpload(e.body_text())
    }
}
