//! Documentation URL resolution.
//!
//! - [`BaseUrlDocResolver`] - Joins relative paths onto a configured documentation root

mod base_url_resolver;

pub use base_url_resolver::BaseUrlDocResolver;
