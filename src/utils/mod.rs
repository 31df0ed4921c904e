//! Pure helpers shared by the service and the CLI.
//!
//! - [`link_classifier`] - Gallery URL classification
//! - [`formatter`] - Link list markup, shuffling and media tagging

pub mod formatter;
pub mod link_classifier;
