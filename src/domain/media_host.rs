//! Media host gateway trait.
//!
//! Abstracts the single outbound call made per resolution. The concrete
//! implementation lives in [`crate::infrastructure::imgur`]; a mock is
//! generated via `mockall` for service tests.

use crate::domain::entities::{ResourceId, ResourceKind};
use async_trait::async_trait;

/// Raw answer from the media host.
///
/// Status interpretation and body decoding are left to the resolver.
#[derive(Debug, Clone)]
pub struct HostResponse {
    pub status: u16,
    pub body: String,
    /// Fully resolved request URL. Diagnostics only, never shown to callers.
    pub endpoint: String,
}

/// Transport-level failure before any response was received.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("media host client setup failed: {0}")]
    Setup(String),
}

impl HostError {
    /// Request URL the failure relates to, when one was built.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            HostError::Timeout { endpoint } | HostError::Transport { endpoint, .. } => {
                Some(endpoint)
            }
            HostError::Setup(_) => None,
        }
    }
}

/// Gateway to the third-party media host API.
///
/// # Implementations
///
/// - [`crate::infrastructure::imgur::ImgurClient`] - reqwest-backed imgur API client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Issues one GET for the resource.
    ///
    /// `kind` is turned into its literal path segment and `id` is placed as a
    /// single escaped path segment; neither is interpolated raw.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when no HTTP response was obtained. Non-2xx
    /// statuses are returned as `Ok`.
    async fn fetch(&self, kind: ResourceKind, id: &ResourceId) -> Result<HostResponse, HostError>;
}
