//! Handlers for link list formatting and preview.

use axum::Json;
use serde_json::json;
use validator::Validate;

use crate::api::dto::format::{
    FormatAction, FormatRequest, FormatResponse, PreviewRequest, PreviewResponse,
};
use crate::error::AppError;
use crate::utils::formatter;

/// Applies a formatter operation to a newline-delimited link list.
///
/// # Endpoint
///
/// `POST /api/format`
///
/// # Request Body
///
/// ```json
/// { "text": "https://x/1.jpg\nhttps://x/2.jpg", "action": "reformat", "format": "markdown" }
/// ```
///
/// `action` is one of `strip`, `toggle_tags`, `shuffle`, `reformat`.
/// `format` (`bbcode`, `html`, `markdown`, `plain`) is required for `reformat`.
///
/// # Errors
///
/// Returns 400 Bad Request if `reformat` is requested without a `format`.
pub async fn format_handler(
    Json(payload): Json<FormatRequest>,
) -> Result<Json<FormatResponse>, AppError> {
    payload.validate()?;

    let text = match payload.action {
        FormatAction::Strip => formatter::strip_markup(&payload.text),
        FormatAction::ToggleTags => formatter::toggle_tag_wrap(&payload.text),
        FormatAction::Shuffle => formatter::shuffle(&payload.text),
        FormatAction::Reformat => {
            let target = payload.format.ok_or_else(|| {
                AppError::bad_request(
                    "Missing target format",
                    json!({ "field": "format", "allowed": ["bbcode", "html", "markdown", "plain"] }),
                )
            })?;
            formatter::reformat(&payload.text, target)
        }
    };

    Ok(Json(FormatResponse { text }))
}

/// Tags each link in a list as image or video.
///
/// # Endpoint
///
/// `POST /api/preview`
///
/// # Response
///
/// ```json
/// { "items": [{ "url": "https://x/2.mp4", "kind": "video" }] }
/// ```
pub async fn preview_handler(
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    payload.validate()?;

    Ok(Json(PreviewResponse {
        items: formatter::parse_media_urls(&payload.text),
    }))
}
