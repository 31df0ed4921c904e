//! Handler for the link resolution endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::links::{LinksRequest, LinksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a gallery URL into its direct media links.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://imgur.com/a/drawing-strangers-AGCGQ" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "links": "https://i.imgur.com/1.jpg\nhttps://i.imgur.com/2.mp4",
///   "count": 2
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: URL is not a recognized gallery URL (no outbound call is made)
/// - **429 Too Many Requests**: media host is rate limiting
/// - **500 Internal Server Error**: media host error or unexpected response
pub async fn links_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinksRequest>,
) -> Result<Json<LinksResponse>, AppError> {
    payload.validate()?;

    let links = state.resolver.resolve(&payload.url).await?;

    Ok(Json(links.into()))
}
