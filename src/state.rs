//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ResolverService;
use crate::infrastructure::ImgurClient;

/// State shared by all handlers.
///
/// Holds no per-request or per-session data; cloning shares the resolver.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolverService<ImgurClient>>,
}

impl AppState {
    pub fn new(resolver: Arc<ResolverService<ImgurClient>>) -> Self {
        Self { resolver }
    }

    /// Builds the state around an imgur client.
    pub fn from_client(client: ImgurClient) -> Self {
        Self::new(Arc::new(ResolverService::new(Arc::new(client))))
    }
}
