//! Classified gallery link: the resource a pasted URL points at.

use std::fmt;

/// Kind of resource addressed on the media host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A collection of media items.
    Album,
    /// A single media item.
    Image,
}

impl ResourceKind {
    /// Literal API path segment for this kind.
    ///
    /// Only these two values are ever placed into an outbound request path.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Album => "album",
            ResourceKind::Image => "image",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Opaque identifier of a host-side resource.
///
/// Always non-empty and restricted to `[a-zA-Z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId(String);

impl ResourceId {
    /// Builds an id from a raw string, rejecting empty values and any
    /// character outside `[a-zA-Z0-9_-]`.
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.chars().all(is_id_char) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true for characters allowed in a resource id.
pub fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Result of classifying a pasted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLink {
    pub resource_id: ResourceId,
    pub kind: ResourceKind,
}

impl ClassifiedLink {
    pub fn new(resource_id: ResourceId, kind: ResourceKind) -> Self {
        Self { resource_id, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_accepts_charset() {
        let id = ResourceId::parse("abc_DEF-123").unwrap();
        assert_eq!(id.as_str(), "abc_DEF-123");
    }

    #[test]
    fn test_resource_id_rejects_empty() {
        assert!(ResourceId::parse("").is_none());
    }

    #[test]
    fn test_resource_id_rejects_unsafe_characters() {
        assert!(ResourceId::parse("abc/../def").is_none());
        assert!(ResourceId::parse("abc?x=1").is_none());
        assert!(ResourceId::parse("ab cd").is_none());
        assert!(ResourceId::parse("ünï").is_none());
    }

    #[test]
    fn test_kind_path_segments() {
        assert_eq!(ResourceKind::Album.path_segment(), "album");
        assert_eq!(ResourceKind::Image.path_segment(), "image");
        assert_eq!(ResourceKind::Album.to_string(), "album");
    }
}
