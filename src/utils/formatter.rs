//! Transforms over newline-delimited link lists.
//!
//! All functions are pure apart from [`shuffle`], which draws from the
//! thread-local RNG. Malformed input is accepted: empty lines are dropped by
//! the stripping functions and non-URL lines are dropped wherever only URLs
//! are expected.

use crate::domain::entities::{MediaItem, MediaKind};
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::LazyLock;

const IMG_OPEN: &str = "[IMG]";
const IMG_CLOSE: &str = "[/IMG]";

/// `<img ... src="url" ...>` with either quote style.
static HTML_IMG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img[^>]*src=["']([^"']+)["'][^>]*>"#).unwrap());

/// `![label](url)`.
static MARKDOWN_IMG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").unwrap());

/// Output convention for [`reformat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// `[IMG]url[/IMG]`
    #[value(name = "bbcode")]
    BbCode,
    /// `<img src="url" alt="" />`
    Html,
    /// `![image](url)`
    Markdown,
    /// Bare URL.
    Plain,
}

impl TargetFormat {
    fn wrap(self, url: &str) -> String {
        match self {
            TargetFormat::BbCode => format!("{IMG_OPEN}{url}{IMG_CLOSE}"),
            TargetFormat::Html => format!(r#"<img src="{url}" alt="" />"#),
            TargetFormat::Markdown => format!("![image]({url})"),
            TargetFormat::Plain => url.to_string(),
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetFormat::BbCode => "bbcode",
            TargetFormat::Html => "html",
            TargetFormat::Markdown => "markdown",
            TargetFormat::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// Returns the inner text when `line` is exactly `[IMG]...[/IMG]`.
fn unwrap_img_tag(line: &str) -> Option<&str> {
    line.strip_prefix(IMG_OPEN)?.strip_suffix(IMG_CLOSE)
}

fn is_http_url(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}

/// Removes `[IMG]` tags, `<img>` elements and Markdown images, leaving bare URLs.
///
/// Lines carrying none of them are only trimmed. Empty lines are dropped.
pub fn strip_markup(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let line = unwrap_img_tag(line).unwrap_or(line);
            let line = HTML_IMG_REGEX.replace_all(line, "$1");
            let line = MARKDOWN_IMG_REGEX.replace_all(&line, "$1");
            line.trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps every line in `[IMG]...[/IMG]`, or unwraps lines already wrapped.
///
/// Applying it twice returns the original text.
pub fn toggle_tag_wrap(text: &str) -> String {
    text.split('\n')
        .map(|line| match unwrap_img_tag(line) {
            Some(inner) => inner.to_string(),
            None => TargetFormat::BbCode.wrap(line),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bare HTTP(S) URLs found in `text`, markup removed.
fn bare_urls(text: &str) -> Vec<String> {
    strip_markup(text)
        .split('\n')
        .filter(|line| is_http_url(line))
        .map(str::to_string)
        .collect()
}

/// Converts every URL in `text` to the `target` convention.
///
/// Existing markup is stripped first and lines that are not HTTP(S) URLs
/// are dropped.
pub fn reformat(text: &str, target: TargetFormat) -> String {
    bare_urls(text)
        .iter()
        .map(|url| target.wrap(url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Randomly permutes the lines of `text`.
pub fn shuffle(text: &str) -> String {
    shuffle_with(text, &mut rand::rng())
}

/// [`shuffle`] with a caller-provided RNG.
pub fn shuffle_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.shuffle(rng);
    lines.join("\n")
}

/// Image or video, by file extension.
pub fn classify_media_kind(url: &str) -> MediaKind {
    MediaKind::from_url(url)
}

/// Extracts URLs from any supported markup and tags each one for preview.
pub fn parse_media_urls(text: &str) -> Vec<MediaItem> {
    bare_urls(text).into_iter().map(MediaItem::new).collect()
}
