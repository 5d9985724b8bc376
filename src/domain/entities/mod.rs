//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted code → URL mapping
//! - [`NewShortLink`] - Input for inserting a new mapping

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
