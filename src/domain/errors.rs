//! Failure taxonomy for link resolution.

/// Errors returned by [`crate::application::services::ResolverService::resolve`].
///
/// Every variant is fatal to the single request; none is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Input is not a recognized gallery URL or failed sanitization.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// Media host answered 429. Callers may retry after a delay.
    #[error("Media host rate limit exceeded")]
    UpstreamRateLimited,

    /// Media host answered a non-2xx status or could not be reached.
    ///
    /// `status` is `None` when no response arrived (timeout, connection failure).
    #[error("Media host error: {detail}")]
    UpstreamError { status: Option<u16>, detail: String },

    /// Media host answered 2xx with an unparsable or unexpected body.
    #[error("Unexpected response from media host")]
    UpstreamMalformedResponse,
}

impl ResolveError {
    /// Short machine-readable label, used in logs and error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::InvalidUrl => "invalid_url",
            ResolveError::UpstreamRateLimited => "upstream_rate_limited",
            ResolveError::UpstreamError { .. } => "upstream_error",
            ResolveError::UpstreamMalformedResponse => "upstream_malformed_response",
        }
    }
}
