#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header::AUTHORIZATION};
use gallery_links::infrastructure::ImgurClient;
use gallery_links::state::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_CLIENT_ID: &str = "test-client-id";

/// Request observed by the fake media host.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Fake imgur API bound on a random local port.
pub struct FakeUpstream {
    pub api_base: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeUpstream {
    /// Starts a server answering every request with `status` and `body`.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        Self::start_with_delay(status, body, None).await
    }

    /// Like [`FakeUpstream::start`], sleeping `delay` before answering.
    pub async fn start_with_delay(
        status: StatusCode,
        body: impl Into<String>,
        delay: Option<Duration>,
    ) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = UpstreamState {
            status,
            body: body.into(),
            delay,
            hits: hits.clone(),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(upstream_handler).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            api_base: format!("http://{addr}/3"),
            hits,
            requests,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn upstream_handler(
    State(state): State<UpstreamState>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (state.status, state.body)
}

/// Builds application state whose imgur client points at `upstream`.
pub fn create_test_state(upstream: &FakeUpstream) -> AppState {
    let client = ImgurClient::new(
        &upstream.api_base,
        TEST_CLIENT_ID,
        Duration::from_secs(1),
        Duration::from_secs(1),
    )
    .unwrap();

    AppState::from_client(client)
}
