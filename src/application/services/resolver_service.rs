//! Gallery link resolution service.

use std::sync::Arc;

use crate::domain::ResolveError;
use crate::domain::entities::classified_link::is_id_char;
use crate::domain::entities::{LinkList, ResourceId, ResourceKind};
use crate::domain::media_host::{HostError, HostResponse, MediaHost};
use crate::utils::link_classifier::classify;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

/// Longest upstream error message passed on to callers.
const MAX_DETAIL_CHARS: usize = 200;

/// Resolves pasted gallery URLs into direct media links.
///
/// Stateless: one call performs at most one outbound request and shares
/// nothing with other calls, so a single instance serves concurrent requests.
pub struct ResolverService<H: MediaHost> {
    host: Arc<H>,
}

impl<H: MediaHost> ResolverService<H> {
    /// Creates a new resolver service.
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }

    /// Resolves `url` into the ordered list of direct links it contains.
    ///
    /// # Flow
    ///
    /// 1. Classify the URL; unrecognized input fails before any outbound call
    /// 2. Re-sanitize the resource id
    /// 3. Fetch `{kind}/{id}` from the media host
    /// 4. Map the status and decode the body according to the requested kind
    ///
    /// Album links keep the order the host returned them in.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidUrl`] - URL not recognized or id failed sanitization
    /// - [`ResolveError::UpstreamRateLimited`] - host answered 429
    /// - [`ResolveError::UpstreamError`] - host answered another non-2xx status,
    ///   timed out or was unreachable
    /// - [`ResolveError::UpstreamMalformedResponse`] - 2xx body is not JSON or
    ///   lacks the expected links
    pub async fn resolve(&self, url: &str) -> Result<LinkList, ResolveError> {
        let classified = classify(url).ok_or(ResolveError::InvalidUrl)?;
        let id = sanitize_id(&classified.resource_id)?;
        let kind = classified.kind;

        let response = self.host.fetch(kind, &id).await.map_err(|e| {
            warn!(
                input_url = %url,
                resource_id = %id,
                endpoint = e.endpoint().unwrap_or("-"),
                error = %e,
                "Media host request failed"
            );
            transport_failure(&e)
        })?;

        let links = interpret_response(kind, &id, &response).map_err(|e| {
            warn!(
                input_url = %url,
                resource_id = %id,
                endpoint = %response.endpoint,
                status = response.status,
                error_kind = e.kind(),
                "Gallery resolution failed"
            );
            e
        })?;

        info!(input_url = %url, %kind, count = links.len(), "Gallery resolved");

        Ok(links)
    }
}

/// Strips characters outside `[a-zA-Z0-9_-]` and rejects the id if anything
/// was removed or nothing is left.
pub fn sanitize_id(id: &ResourceId) -> Result<ResourceId, ResolveError> {
    let sanitized: String = id.as_str().chars().filter(|c| is_id_char(*c)).collect();

    if sanitized.is_empty() || sanitized != id.as_str() {
        return Err(ResolveError::InvalidUrl);
    }

    ResourceId::parse(&sanitized).ok_or(ResolveError::InvalidUrl)
}

fn transport_failure(e: &HostError) -> ResolveError {
    let detail = match e {
        HostError::Timeout { .. } => "Media host did not respond in time",
        HostError::Transport { .. } => "Media host is unreachable",
        HostError::Setup(_) => "Media host client is misconfigured",
    };

    ResolveError::UpstreamError {
        status: None,
        detail: detail.to_string(),
    }
}

fn interpret_response(
    kind: ResourceKind,
    id: &ResourceId,
    response: &HostResponse,
) -> Result<LinkList, ResolveError> {
    let status = response.status;

    if status == StatusCode::TOO_MANY_REQUESTS.as_u16() {
        return Err(ResolveError::UpstreamRateLimited);
    }

    if !(200..300).contains(&status) {
        let detail = upstream_message(&response.body)
            .filter(|m| !m.contains(id.as_str()) && !m.contains(&response.endpoint))
            .unwrap_or_else(|| reason_phrase(status));

        return Err(ResolveError::UpstreamError {
            status: Some(status),
            detail,
        });
    }

    HostPayload::decode(kind, &response.body).map(HostPayload::into_links)
}

/// Human-readable message from a JSON error body, if the host sent one.
///
/// Recognizes `data.error` (string or `{ message }`), top-level `error`
/// and `errors[0].detail`.
fn upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    [
        "/data/error",
        "/data/error/message",
        "/error",
        "/error/message",
        "/errors/0/detail",
    ]
    .iter()
    .filter_map(|pointer| value.pointer(pointer))
    .find_map(|v| v.as_str().map(str::trim).filter(|m| !m.is_empty()))
    .map(|m| m.chars().take(MAX_DETAIL_CHARS).collect())
}

fn reason_phrase(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct AlbumData {
    images: Vec<LinkEntry>,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    link: String,
}

/// Successful host payload, shape chosen by the requested resource kind.
#[derive(Debug)]
enum HostPayload {
    Album(Vec<LinkEntry>),
    Image(LinkEntry),
}

impl HostPayload {
    fn decode(kind: ResourceKind, body: &str) -> Result<Self, ResolveError> {
        let value: Value =
            serde_json::from_str(body).map_err(|_| ResolveError::UpstreamMalformedResponse)?;

        let payload = match kind {
            ResourceKind::Album => serde_json::from_value::<Envelope<AlbumData>>(value)
                .map(|envelope| HostPayload::Album(envelope.data.images)),
            ResourceKind::Image => serde_json::from_value::<Envelope<LinkEntry>>(value)
                .map(|envelope| HostPayload::Image(envelope.data)),
        }
        .map_err(|_| ResolveError::UpstreamMalformedResponse)?;

        if let HostPayload::Image(entry) = &payload
            && entry.link.is_empty()
        {
            return Err(ResolveError::UpstreamMalformedResponse);
        }

        Ok(payload)
    }

    fn into_links(self) -> LinkList {
        match self {
            HostPayload::Album(images) => images.into_iter().map(|i| i.link).collect::<Vec<_>>(),
            HostPayload::Image(entry) => vec![entry.link],
        }
        .into()
    }
}
