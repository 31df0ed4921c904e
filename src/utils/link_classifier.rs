//! Gallery URL classification.
//!
//! Maps a pasted URL onto the resource it addresses at the media host, or
//! reports that the URL is not recognized. Pure and total: never panics,
//! never performs I/O.

use crate::domain::entities::{ClassifiedLink, ResourceId, ResourceKind};
use regex::Regex;
use std::sync::LazyLock;

/// Inputs longer than this (in characters) are rejected outright.
pub const MAX_INPUT_LENGTH: usize = 2048;

/// Exact length of a single-image id.
const IMAGE_ID_LENGTH: usize = 7;

/// Minimum length of a slug segment considered as an album id.
const MIN_SLUG_ID_LENGTH: usize = 3;

/// Album-shaped URLs: `/gallery/<slug>`, `/t/gallery/<slug>`, `/a/<slug>`.
static ALBUM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.|m\.)?imgur\.com/(?:t/gallery|gallery|a)/([A-Za-z0-9_-]+)")
        .unwrap()
});

/// Single-image URLs: host followed directly by a 7-character id.
static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^https?://(?:www\.|m\.)?imgur\.com/([A-Za-z0-9]{{{IMAGE_ID_LENGTH}}})$"
    ))
    .unwrap()
});

/// Classifies a pasted URL.
///
/// # Rules
///
/// 1. Inputs longer than [`MAX_INPUT_LENGTH`] characters are rejected
/// 2. `/d-` path prefixes are normalized to `/`
/// 3. Album paths (`gallery`, `t/gallery`, `a`) yield [`ResourceKind::Album`];
///    the id is taken from the slug, see [`album_id_from_slug`]
/// 4. A host followed by exactly 7 alphanumerics yields [`ResourceKind::Image`]
///
/// # Examples
///
/// ```ignore
/// let link = classify("https://imgur.com/a/drawing-strangers-AGCGQ").unwrap();
/// assert_eq!(link.resource_id.as_str(), "AGCGQ");
/// assert_eq!(link.kind, ResourceKind::Album);
///
/// assert!(classify("https://imgur.com/abcdef").is_none());
/// ```
pub fn classify(input: &str) -> Option<ClassifiedLink> {
    if input.chars().count() > MAX_INPUT_LENGTH {
        return None;
    }

    let normalized = input.trim().replace("/d-", "/");

    if let Some(captures) = ALBUM_REGEX.captures(&normalized)
        && let Some(id) = album_id_from_slug(&captures[1])
    {
        return Some(ClassifiedLink::new(id, ResourceKind::Album));
    }

    let captures = IMAGE_REGEX.captures(&normalized)?;
    let id = ResourceId::parse(&captures[1])?;
    Some(ClassifiedLink::new(id, ResourceKind::Image))
}

/// Extracts the album id from a gallery slug.
///
/// Slugs are either a bare id (`AGCGQ`) or readable words followed by the id
/// (`drawing-strangers-AGCGQ`). Dash-separated segments are scanned right to
/// left and the first alphanumeric segment of at least three characters
/// wins. If none qualifies, the whole slug is used when it is a valid id.
pub fn album_id_from_slug(slug: &str) -> Option<ResourceId> {
    if slug.contains('-')
        && let Some(segment) = slug.rsplit('-').find(|s| is_slug_id_segment(s))
    {
        return ResourceId::parse(segment);
    }

    ResourceId::parse(slug)
}

fn is_slug_id_segment(segment: &str) -> bool {
    segment.len() >= MIN_SLUG_ID_LENGTH && segment.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::classified_link::is_id_char;

    fn album(id: &str) -> Option<ClassifiedLink> {
        Some(ClassifiedLink::new(
            ResourceId::parse(id).unwrap(),
            ResourceKind::Album,
        ))
    }

    fn image(id: &str) -> Option<ClassifiedLink> {
        Some(ClassifiedLink::new(
            ResourceId::parse(id).unwrap(),
            ResourceKind::Image,
        ))
    }

    #[test]
    fn test_slugged_album() {
        assert_eq!(
            classify("https://imgur.com/a/drawing-strangers-AGCGQ"),
            album("AGCGQ")
        );
    }

    #[test]
    fn test_bare_album_prefixes() {
        assert_eq!(classify("https://imgur.com/a/AGCGQ"), album("AGCGQ"));
        assert_eq!(classify("https://imgur.com/gallery/AGCGQ"), album("AGCGQ"));
        assert_eq!(classify("https://imgur.com/t/gallery/AGCGQ"), album("AGCGQ"));
        assert_eq!(classify("http://imgur.com/a/AGCGQ"), album("AGCGQ"));
        assert_eq!(classify("https://www.imgur.com/a/AGCGQ"), album("AGCGQ"));
    }

    #[test]
    fn test_album_ignores_trailing_path_and_query() {
        assert_eq!(classify("https://imgur.com/a/AGCGQ/embed"), album("AGCGQ"));
        assert_eq!(classify("https://imgur.com/gallery/AGCGQ?foo=bar"), album("AGCGQ"));
        assert_eq!(classify("https://imgur.com/a/AGCGQ#top"), album("AGCGQ"));
    }

    #[test]
    fn test_slug_scan_is_right_to_left_first_match() {
        assert_eq!(classify("https://imgur.com/gallery/cat-pics-XyZ12"), album("XyZ12"));
        // Trailing short segment is skipped, the next qualifying one wins.
        assert_eq!(classify("https://imgur.com/gallery/funny-cats-ab"), album("cats"));
    }

    #[test]
    fn test_slug_without_qualifying_segment_uses_whole_slug() {
        assert_eq!(classify("https://imgur.com/a/ab-cd"), album("ab-cd"));
        assert_eq!(classify("https://imgur.com/a/x_y-z"), album("x_y-z"));
    }

    #[test]
    fn test_d_prefix_is_normalized() {
        assert_eq!(classify("https://imgur.com/a/d-AGCGQ"), album("AGCGQ"));
        assert_eq!(classify("https://imgur.com/d-abcdefg"), image("abcdefg"));
    }

    #[test]
    fn test_single_image_exact_length() {
        assert_eq!(classify("https://imgur.com/abcdefg"), image("abcdefg"));
        assert_eq!(classify("https://imgur.com/AbC1234"), image("AbC1234"));
        assert!(classify("https://imgur.com/abcdef").is_none());
        assert!(classify("https://imgur.com/abcdefgh").is_none());
    }

    #[test]
    fn test_single_image_rejects_suffixes() {
        assert!(classify("https://imgur.com/abcdefg/").is_none());
        assert!(classify("https://imgur.com/abcdefg.jpg").is_none());
        assert!(classify("https://imgur.com/abc_efg").is_none());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(classify("  https://imgur.com/abcdefg\n"), image("abcdefg"));
    }

    #[test]
    fn test_unrecognized_inputs() {
        assert!(classify("").is_none());
        assert!(classify("not a url").is_none());
        assert!(classify("imgur.com/abcdefg").is_none());
        assert!(classify("ftp://imgur.com/abcdefg").is_none());
        assert!(classify("https://example.com/a/AGCGQ").is_none());
        assert!(classify("https://notimgur.com/a/AGCGQ").is_none());
        assert!(classify("https://imgur.com/").is_none());
        assert!(classify("https://imgur.com/a/").is_none());
        assert!(classify("https://imgur.com/user/someone").is_none());
    }

    #[test]
    fn test_length_guard() {
        let prefix = "https://imgur.com/a/";
        let at_limit = format!("{prefix}{}", "A".repeat(MAX_INPUT_LENGTH - prefix.len()));
        assert_eq!(at_limit.chars().count(), MAX_INPUT_LENGTH);
        assert!(classify(&at_limit).is_some());

        let over_limit = format!("{at_limit}A");
        assert!(classify(&over_limit).is_none());

        let long_image = format!("https://imgur.com/abcdefg{}", " ".repeat(MAX_INPUT_LENGTH));
        assert!(classify(&long_image).is_none());
    }

    #[test]
    fn test_length_guard_counts_characters() {
        let input = format!("https://imgur.com/a/AGCGQ?{}", "é".repeat(1500));
        assert!(input.len() > MAX_INPUT_LENGTH);
        assert!(classify(&input).is_some());
    }

    #[test]
    fn test_classified_ids_are_always_in_charset() {
        let inputs = [
            "https://imgur.com/a/%2e%2e",
            "https://imgur.com/a/../../etc",
            "https://imgur.com/gallery/-",
            "https://imgur.com/gallery/---abc---",
            "https://imgur.com/a/abc def",
            "https://imgur.com/a/ab;cd",
            "https://imgur.com/t/gallery/x?y=z",
            "https://imgur.com/\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}",
            "https://imgur.com/ａｂｃｄｅｆｇ",
        ];

        for input in inputs {
            if let Some(link) = classify(input) {
                let id = link.resource_id.as_str();
                assert!(!id.is_empty(), "empty id for {input:?}");
                assert!(id.chars().all(is_id_char), "bad id {id:?} for {input:?}");
            }
        }
    }
}
