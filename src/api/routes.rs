//! API route configuration.

use crate::api::handlers::{format_handler, links_handler, preview_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes. No authentication.
///
/// # Endpoints
///
/// - `POST /links`   - Resolve a gallery URL into direct links
/// - `POST /format`  - Strip, toggle tags, shuffle or reformat a link list
/// - `POST /preview` - Tag each link as image or video
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(links_handler))
        .route("/format", post(format_handler))
        .route("/preview", post(preview_handler))
}
