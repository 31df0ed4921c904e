//! HTTP request handlers for API endpoints.

pub mod format;
pub mod health;
pub mod links;

pub use format::{format_handler, preview_handler};
pub use health::health_handler;
pub use links::links_handler;
