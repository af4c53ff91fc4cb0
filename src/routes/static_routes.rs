//! Static files from the uploads directory, and the not-found fallback.

use axum::handler::HandlerWithoutStateExt;
use axum::http::Uri;
use axum::Router;
use tower_http::services::ServeDir;

use crate::error::GalleryError;
use crate::state::AppState;

/// Serves files under `directory` for any path no route claims.
///
/// Missing files and non-GET methods end in `RouteNotFound`.
pub fn with_static_fallback(router: Router<AppState>, directory: &str) -> Router<AppState> {
    let serve_dir = ServeDir::new(directory)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(route_not_found.into_service());

    router.fallback_service(serve_dir)
}

async fn route_not_found(uri: Uri) -> GalleryError {
    GalleryError::RouteNotFound(uri.path().to_string())
}
