//! Help panel rendering.
//!
//! - [`content`] - Fixed copy of the Deletion Queue panel
//! - [`panel`] - [`HelpPanelRenderer`], which turns a catalog into a [`crate::domain::node::Node`]

pub mod content;
pub mod panel;

pub use panel::{HelpPanelRenderer, SharedPanelRenderer};
