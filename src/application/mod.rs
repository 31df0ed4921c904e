//! Application layer services implementing business logic.
//!
//! Services orchestrate the classifier, the media host gateway and response
//! decoding, and provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Gallery URL to direct links

pub mod services;
