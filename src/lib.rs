//! # Deletion Queue Help
//!
//! A data-driven help panel for the Deletion Queue: fixed explanatory prose
//! plus a curated list of documentation links, rendered to a display tree.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link catalog, display tree, capability traits
//! - **Render Layer** ([`render`]) - The pure [`render::HelpPanelRenderer`]
//! - **Infrastructure Layer** ([`infrastructure`]) - URL resolver, icon renderers, catalog files
//! - **API Layer** ([`api`]) - JSON display tree and health endpoints
//! - **Web Layer** ([`web`]) - HTML help page and fragment
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use deletion_queue_help::prelude::*;
//!
//! let resolver = BaseUrlDocResolver::new("https://docs.example.com/").unwrap();
//! let renderer = HelpPanelRenderer::new(Arc::new(resolver), Arc::new(NullIconRenderer::new()));
//!
//! let panel = renderer.render(&DELETION_QUEUE_LINKS).unwrap();
//! assert!(panel.to_string().contains(r#"href="https://docs.example.com/TROUBLESHOOTING.md""#));
//! ```
//!
//! ## Configuration
//!
//! The preview host reads its configuration from environment variables via
//! [`config::Config`].

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
pub mod state;

pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::capabilities::{DocUrlResolver, IconKind, IconRenderer, ResolveError};
    pub use crate::domain::catalog::{DELETION_QUEUE_LINKS, LinkCatalog};
    pub use crate::domain::entities::LinkEntry;
    pub use crate::domain::node::{Element, Node};
    pub use crate::error::AppError;
    pub use crate::infrastructure::docs::BaseUrlDocResolver;
    pub use crate::infrastructure::icons::{AssetIconRenderer, NullIconRenderer};
    pub use crate::render::HelpPanelRenderer;
    pub use crate::state::AppState;
}
