//! DTOs for the link resolution endpoint.

use crate::domain::entities::LinkList;
use crate::utils::link_classifier::classify;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to resolve a gallery URL.
#[derive(Debug, Deserialize, Validate)]
pub struct LinksRequest {
    /// Pasted gallery or image URL.
    #[validate(length(min = 1, max = 2048))]
    #[validate(custom(function = "validate_gallery_url"))]
    pub url: String,
}

/// Rejects URLs the classifier does not recognize, before any outbound call.
fn validate_gallery_url(url: &str) -> Result<(), ValidationError> {
    if classify(url).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("gallery_url").with_message("Invalid URL format".into()))
    }
}

/// Resolved direct links, newline-joined.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub links: String,
    pub count: usize,
}

impl From<LinkList> for LinksResponse {
    fn from(list: LinkList) -> Self {
        Self {
            count: list.len(),
            links: list.joined(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::link_classifier::MAX_INPUT_LENGTH;

    #[test]
    fn test_accepts_gallery_url() {
        let request = LinksRequest {
            url: "https://imgur.com/gallery/AGCGQ".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_unrecognized_url() {
        let request = LinksRequest {
            url: "https://example.com/abcdefg".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        let empty = LinksRequest { url: String::new() };
        assert!(empty.validate().is_err());

        let long = LinksRequest {
            url: format!("https://imgur.com/a/{}", "A".repeat(MAX_INPUT_LENGTH)),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_response_from_link_list() {
        let response = LinksResponse::from(LinkList::new(vec![
            "https://x/1.jpg".to_string(),
            "https://x/2.mp4".to_string(),
        ]));
        assert_eq!(response.links, "https://x/1.jpg\nhttps://x/2.mp4");
        assert_eq!(response.count, 2);
    }
}
