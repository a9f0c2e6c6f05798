//! No-op icon renderer.

use crate::domain::capabilities::{IconKind, IconRenderer};
use crate::domain::node::Node;
use tracing::debug;

/// An icon renderer that renders nothing.
///
/// Used when the host has no icon assets (e.g. plain-text CLI output) or in
/// tests where icons are irrelevant.
pub struct NullIconRenderer;

impl NullIconRenderer {
    pub fn new() -> Self {
        debug!("Using NullIconRenderer (icons disabled)");
        Self
    }
}

impl Default for NullIconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRenderer for NullIconRenderer {
    fn render_icon(&self, _kind: IconKind) -> Node {
        Node::empty()
    }
}
