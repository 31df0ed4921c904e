//! Domain layer: entities, the media host contract and the error taxonomy.
//!
//! # Architecture
//!
//! - [`entities`] - Classified links, media items and link lists
//! - [`media_host`] - Trait for the outbound media host call
//! - [`errors`] - [`errors::ResolveError`], the resolution failure kinds
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The media host trait is implemented in `crate::infrastructure`.

pub mod entities;
pub mod errors;
pub mod media_host;

pub use errors::ResolveError;
pub use media_host::{HostError, HostResponse, MediaHost};

#[cfg(test)]
pub use media_host::MockMediaHost;
