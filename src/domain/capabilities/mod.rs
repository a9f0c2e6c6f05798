//! Capabilities a host injects into the help panel renderer.
//!
//! # Capabilities
//!
//! - [`DocUrlResolver`] - Maps a relative documentation path to an absolute URL
//! - [`IconRenderer`] - Maps a symbolic [`IconKind`] to a renderable node
//!
//! Implementations live in [`crate::infrastructure`].

pub mod doc_resolver;
pub mod icon_renderer;

pub use doc_resolver::{DocUrlResolver, ResolveError};
pub use icon_renderer::{IconKind, IconRenderer};

#[cfg(test)]
pub use doc_resolver::MockDocUrlResolver;
#[cfg(test)]
pub use icon_renderer::MockIconRenderer;
