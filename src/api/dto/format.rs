//! DTOs for the formatting and preview endpoints.

use crate::domain::entities::MediaItem;
use crate::utils::formatter::TargetFormat;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Formatter operation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatAction {
    Strip,
    ToggleTags,
    Shuffle,
    Reformat,
}

/// Request to transform a newline-delimited link list.
#[derive(Debug, Deserialize, Validate)]
pub struct FormatRequest {
    #[validate(length(max = 1048576))]
    pub text: String,

    pub action: FormatAction,

    /// Target convention; required when `action` is `reformat`.
    pub format: Option<TargetFormat>,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub text: String,
}

/// Request to tag every link in a list as image or video.
#[derive(Debug, Deserialize, Validate)]
pub struct PreviewRequest {
    #[validate(length(max = 1048576))]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub items: Vec<MediaItem>,
}
