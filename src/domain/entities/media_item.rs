//! Media items and link lists produced for display and export.

use serde::Serialize;
use std::fmt;

/// Extensions (lowercase) rendered as video.
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".gifv", ".webm", ".mov"];

/// Whether a direct link points at an image or a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Tags a URL by its extension. Case-insensitive, suffix-exact.
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A direct media link tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = MediaKind::from_url(&url);
        Self { url, kind }
    }
}

/// Ordered list of direct media links.
///
/// Displayed and transferred newline-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList(Vec<String>);

impl LinkList {
    pub fn new(links: Vec<String>) -> Self {
        Self(links)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Newline-joined representation.
    pub fn joined(&self) -> String {
        self.0.join("\n")
    }
}

impl fmt::Display for LinkList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl From<Vec<String>> for LinkList {
    fn from(links: Vec<String>) -> Self {
        Self(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_video_extensions() {
        assert_eq!(MediaKind::from_url("https://i.imgur.com/a.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("https://i.imgur.com/a.gifv"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("https://i.imgur.com/a.webm"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("https://i.imgur.com/a.mov"), MediaKind::Video);
    }

    #[test]
    fn test_media_kind_is_case_insensitive() {
        assert_eq!(MediaKind::from_url("FOO.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("clip.WebM"), MediaKind::Video);
    }

    #[test]
    fn test_media_kind_is_suffix_exact() {
        assert_eq!(MediaKind::from_url("foo.mp4x"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("foo.mp4.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("https://i.imgur.com/a.gif"), MediaKind::Image);
    }

    #[test]
    fn test_media_item_serializes_lowercase_kind() {
        let item = MediaItem::new("https://x/2.mp4");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "video");
        assert_eq!(json["url"], "https://x/2.mp4");
    }

    #[test]
    fn test_link_list_joined_preserves_order() {
        let list = LinkList::new(vec!["https://x/2.jpg".into(), "https://x/1.jpg".into()]);
        assert_eq!(list.joined(), "https://x/2.jpg\nhttps://x/1.jpg");
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }
}
