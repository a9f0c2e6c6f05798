//! Icon rendering capability.

use crate::domain::node::Node;
use serde::Serialize;
use std::fmt;

/// Symbolic icon identifiers understood by icon renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Marks a link that opens in a new window.
    NewWindow,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::NewWindow => "new-window",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces a renderable fragment for a symbolic icon.
///
/// Rendering an icon never fails from the caller's point of view. An
/// implementation that has no asset for `kind` returns an empty fragment or a
/// placeholder.
#[cfg_attr(test, mockall::automock)]
pub trait IconRenderer: Send + Sync {
    fn render_icon(&self, kind: IconKind) -> Node;
}
