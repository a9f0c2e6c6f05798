//! Deletion Queue help panel renderer.

use std::sync::Arc;

use crate::domain::capabilities::{DocUrlResolver, IconKind, IconRenderer, ResolveError};
use crate::domain::catalog::LinkCatalog;
use crate::domain::entities::LinkEntry;
use crate::domain::node::{Element, Node};
use crate::render::content::{self, Inline};

/// Renderer backed by trait objects, as held in shared application state.
pub type SharedPanelRenderer = HelpPanelRenderer<dyn DocUrlResolver, dyn IconRenderer>;

/// Renders the Deletion Queue help panel from a [`LinkCatalog`].
///
/// The URL resolver and icon renderer are fixed at construction; the catalog
/// is passed to each [`render`](Self::render) call. Rendering is pure: it
/// performs no I/O and equal inputs yield equal trees.
pub struct HelpPanelRenderer<R: DocUrlResolver + ?Sized, I: IconRenderer + ?Sized> {
    resolver: Arc<R>,
    icons: Arc<I>,
}

impl<R: DocUrlResolver + ?Sized, I: IconRenderer + ?Sized> HelpPanelRenderer<R, I> {
    /// Creates a renderer over the given capabilities.
    pub fn new(resolver: Arc<R>, icons: Arc<I>) -> Self {
        Self { resolver, icons }
    }

    /// Renders the panel.
    ///
    /// # Output
    ///
    /// A fragment holding, in order:
    /// 1. `h2` heading
    /// 2. overview paragraph (`separator-top`)
    /// 3. instructions paragraph (`separator-bottom`)
    /// 4. `h3` "Learn more" with the new-window icon
    /// 5. `ul` with one external link per catalog entry, in catalog order
    ///
    /// # Errors
    ///
    /// Returns the resolver's [`ResolveError`] for the first entry whose path
    /// cannot be resolved. No fallback URL is substituted.
    pub fn render(&self, catalog: &LinkCatalog) -> Result<Node, ResolveError> {
        let items = catalog
            .iter()
            .map(|entry| self.link_item(entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Node::fragment(vec![
            Element::new("h2").child(content::HEADING).into(),
            paragraph(content::SEPARATOR_TOP_CLASS, content::OVERVIEW),
            paragraph(content::SEPARATOR_BOTTOM_CLASS, content::INSTRUCTIONS),
            Element::new("h3")
                .child(content::LEARN_MORE)
                .child(self.icons.render_icon(IconKind::NewWindow))
                .into(),
            Element::new("ul").children(items).into(),
        ]))
    }

    fn link_item(&self, entry: &LinkEntry) -> Result<Node, ResolveError> {
        let href = self.resolver.resolve(entry.path())?;

        let link = Element::new("a")
            .attr("href", href)
            .attr("target", content::LINK_TARGET)
            .attr("rel", content::LINK_REL)
            .attr("class", content::LINK_CLASS)
            .child(Node::text(entry.title()));

        Ok(Element::new("li").child(link).into())
    }
}

fn paragraph(class: &str, runs: &[Inline]) -> Node {
    let children = runs.iter().map(|run| match run {
        Inline::Text(text) => Node::text(*text),
        Inline::Strong(text) => Element::new("strong").child(*text).into(),
    });

    Element::new("p").attr("class", class).children(children).into()
}
