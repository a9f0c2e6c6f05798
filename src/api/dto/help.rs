//! DTOs for the help panel endpoint.

use serde::Serialize;

use crate::domain::node::Node;

/// Display tree of a rendered help panel.
///
/// # Example
///
/// ```json
/// {
///   "topic": "deletion-queue",
///   "links": 3,
///   "tree": { "kind": "fragment", "children": [ ... ] }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct HelpPanelResponse {
    pub topic: &'static str,
    /// Number of documentation links in the rendered list.
    pub links: usize,
    pub tree: Node,
}
