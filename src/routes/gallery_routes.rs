//! Gallery page handler.

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};
use tracing::debug;

use crate::error::GalleryError;
use crate::state::AppState;
use crate::views::render_gallery;

/// Registers the gallery route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(gallery))
}

/// Lists every stored image on one page.
///
/// No pagination: each view is a full scan of the store.
async fn gallery(State(state): State<AppState>) -> Result<Html<String>, GalleryError> {
    let records = state.store.list_all().await?;
    debug!(count = records.len(), store = state.store.name(), "Rendering gallery");
    Ok(Html(render_gallery(&records)))
}
