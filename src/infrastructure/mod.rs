//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`imgur`] - reqwest client for the imgur API, implementing
//!   [`crate::domain::MediaHost`]

pub mod imgur;

pub use imgur::ImgurClient;
