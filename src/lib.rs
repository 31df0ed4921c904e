//! # Gallery Links
//!
//! Resolves public imgur gallery URLs into editable lists of direct media
//! links, served over a small Axum API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the media host trait and the error taxonomy
//! - **Application Layer** ([`application`]) - The resolver service
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for the imgur API
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Utilities** ([`utils`]) - URL classification and link list formatting
//!
//! ## Pipeline
//!
//! 1. [`utils::link_classifier::classify`] turns a pasted URL into a resource id and kind
//! 2. [`application::services::ResolverService`] sanitizes it and makes one API call
//! 3. The host's album or image payload is flattened into a [`domain::entities::LinkList`]
//! 4. [`utils::formatter`] reshapes the newline-joined list for display or export
//!
//! ## Quick Start
//!
//! ```bash
//! export IMGUR_CLIENT_ID="your-client-id"
//! cargo run
//!
//! curl -X POST localhost:3000/api/links \
//!   -H 'content-type: application/json' \
//!   -d '{"url": "https://imgur.com/a/drawing-strangers-AGCGQ"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ResolverService;
    pub use crate::domain::ResolveError;
    pub use crate::domain::entities::{ClassifiedLink, LinkList, MediaItem, MediaKind};
    pub use crate::error::AppError;
    pub use crate::infrastructure::ImgurClient;
    pub use crate::state::AppState;
    pub use crate::utils::formatter::TargetFormat;
}
