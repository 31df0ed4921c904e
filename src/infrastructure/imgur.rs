//! imgur API client implementing [`MediaHost`].

use crate::config::Config;
use crate::domain::entities::{ResourceId, ResourceKind};
use crate::domain::media_host::{HostError, HostResponse, MediaHost};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Public imgur API v3 base URL.
pub const DEFAULT_API_BASE: &str = "https://api.imgur.com/3";

/// reqwest-backed client for the imgur API.
///
/// Holds one pooled [`reqwest::Client`]; cloning is cheap and all clones share
/// the pool. The `Client-ID` credential is marked sensitive so it never shows
/// up in `Debug` output.
#[derive(Debug, Clone)]
pub struct ImgurClient {
    http: reqwest::Client,
    api_base: Url,
    authorization: HeaderValue,
}

impl ImgurClient {
    /// Creates a client for `api_base` authenticating with `client_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Setup`] if the base URL is not an absolute
    /// HTTP(S) URL, the client id is not a valid header value, or the HTTP
    /// client cannot be built.
    pub fn new(
        api_base: &str,
        client_id: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, HostError> {
        let api_base = Url::parse(api_base)
            .map_err(|e| HostError::Setup(format!("invalid API base URL: {e}")))?;

        if !matches!(api_base.scheme(), "http" | "https") || api_base.cannot_be_a_base() {
            return Err(HostError::Setup(
                "API base URL must be an absolute http(s) URL".to_string(),
            ));
        }

        let mut authorization = HeaderValue::from_str(&format!("Client-ID {client_id}"))
            .map_err(|_| HostError::Setup("client id is not a valid header value".to_string()))?;
        authorization.set_sensitive(true);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| HostError::Setup(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base,
            authorization,
        })
    }

    /// Creates a client from service configuration.
    pub fn from_config(config: &Config) -> Result<Self, HostError> {
        Self::new(
            &config.imgur_api_base,
            &config.imgur_client_id,
            Duration::from_secs(config.upstream_timeout_seconds),
            Duration::from_secs(config.upstream_connect_timeout_seconds),
        )
    }

    /// Builds `{api-base}/{kind}/{id}`.
    ///
    /// The kind contributes only its literal segment and the id is pushed as a
    /// single percent-encoded segment.
    pub fn endpoint(&self, kind: ResourceKind, id: &ResourceId) -> Result<Url, HostError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| HostError::Setup("API base URL cannot have path segments".to_string()))?
            .pop_if_empty()
            .push(kind.path_segment())
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl MediaHost for ImgurClient {
    async fn fetch(&self, kind: ResourceKind, id: &ResourceId) -> Result<HostResponse, HostError> {
        let endpoint = self.endpoint(kind, id)?;
        let endpoint_str = endpoint.to_string();

        debug!(endpoint = %endpoint_str, "Requesting media host");

        let response = self
            .http
            .get(endpoint)
            .header(AUTHORIZATION, self.authorization.clone())
            .send()
            .await
            .map_err(|e| transport_error(e, &endpoint_str))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, &endpoint_str))?;

        debug!(endpoint = %endpoint_str, status, bytes = body.len(), "Media host responded");

        Ok(HostResponse {
            status,
            body,
            endpoint: endpoint_str,
        })
    }
}

fn transport_error(e: reqwest::Error, endpoint: &str) -> HostError {
    if e.is_timeout() {
        HostError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        HostError::Transport {
            endpoint: endpoint.to_string(),
            reason: e.without_url().to_string(),
        }
    }
}
