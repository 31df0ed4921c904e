//! Core domain entities.
//!
//! Plain data structures with no I/O. Every value is recomputed per request;
//! nothing here is persisted.
//!
//! - [`ClassifiedLink`] - Resource id and kind extracted from a pasted URL
//! - [`MediaItem`] - A direct link tagged as image or video
//! - [`LinkList`] - Ordered list of direct links

pub mod classified_link;
pub mod media_item;

pub use classified_link::{ClassifiedLink, ResourceId, ResourceKind};
pub use media_item::{LinkList, MediaItem, MediaKind};
