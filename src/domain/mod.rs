//! Domain layer: help content data model and the capabilities it depends on.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::LinkEntry`])
//! - [`catalog`] - Ordered, immutable link catalogs
//! - [`node`] - The renderable display tree
//! - [`capabilities`] - Traits for URL resolution and icon rendering
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation layers
//! - Capability traits define contracts implemented by the infrastructure layer
//! - Rendering lives in [`crate::render`] and only depends on this layer

pub mod capabilities;
pub mod catalog;
pub mod entities;
pub mod node;
