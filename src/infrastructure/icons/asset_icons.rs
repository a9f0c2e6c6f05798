//! Icon renderer backed by static SVG assets.

use crate::domain::capabilities::{IconKind, IconRenderer};
use crate::domain::node::{Element, Node};

/// Renders icons as decorative `<img>` elements.
///
/// The asset for a kind lives at `{base_path}/{kind}.svg`, e.g.
/// `/static/icons/new-window.svg`. Whether the asset exists is the asset
/// server's concern; a missing file shows as a broken decorative image with an
/// empty `alt`.
#[derive(Debug, Clone)]
pub struct AssetIconRenderer {
    base_path: String,
}

impl AssetIconRenderer {
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the asset for `kind`.
    pub fn asset_url(&self, kind: IconKind) -> String {
        format!("{}/{}.svg", self.base_path, kind)
    }
}

impl IconRenderer for AssetIconRenderer {
    fn render_icon(&self, kind: IconKind) -> Node {
        Element::new("img")
            .attr("src", self.asset_url(kind))
            .attr("alt", "")
            .attr("class", format!("icon icon-{kind}"))
            .attr("aria-hidden", "true")
            .into()
    }
}
