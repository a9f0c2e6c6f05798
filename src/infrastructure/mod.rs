//! Infrastructure layer: concrete implementations of domain capabilities.
//!
//! # Modules
//!
//! - [`docs`] - Documentation URL resolvers
//! - [`icons`] - Icon renderers (asset-backed and no-op)
//! - [`catalog_file`] - Loading link catalogs from JSON files

pub mod catalog_file;
pub mod docs;
pub mod icons;
