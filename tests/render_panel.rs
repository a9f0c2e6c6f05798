mod common;

use common::{DOCS_PREFIX, prefix_renderer};
use deletion_queue_help::domain::catalog::{DELETION_QUEUE_LINKS, LinkCatalog};
use deletion_queue_help::domain::entities::LinkEntry;
use deletion_queue_help::domain::node::{Element, Node};
use deletion_queue_help::infrastructure::docs::BaseUrlDocResolver;
use deletion_queue_help::infrastructure::icons::AssetIconRenderer;
use deletion_queue_help::render::HelpPanelRenderer;
use std::sync::Arc;

const OVERVIEW_TEXT: &str = "You can view the current matches in the deletion queue. \
A match is a value you wish to search for which identifies rows in your S3 data lake \
to be deleted. For example, a match could be the ID of a specific customer.";

const INSTRUCTIONS_TEXT: &str = "To add a new match to the deletion queue, choose \
Add Match to the Deletion Queue. To remove a Match from the Deletion Queue, choose the \
match from the list and then choose Remove. Once you have started a Deletion Job, you \
should not remove any items from the Deletion Queue which were present when you started \
the job.";

fn top_level(panel: &Node) -> &[Node] {
    match panel {
        Node::Fragment { children } => children,
        other => panic!("expected a fragment, got {other:?}"),
    }
}

fn element(node: &Node) -> &Element {
    match node {
        Node::Element(element) => element,
        other => panic!("expected an element, got {other:?}"),
    }
}

fn links(panel: &Node) -> Vec<&Element> {
    panel.find_all("a")
}

#[test]
fn test_builtin_catalog_with_prefix_resolver() {
    let panel = prefix_renderer().render(&DELETION_QUEUE_LINKS).unwrap();

    let hrefs: Vec<&str> = links(&panel)
        .iter()
        .map(|a| a.attribute("href").unwrap())
        .collect();

    assert_eq!(
        hrefs,
        vec![
            "https://docs.example.com/OVERVIEW.md#matches",
            "https://docs.example.com/OVERVIEW.md#adding-a-match-to-the-queue",
            "https://docs.example.com/TROUBLESHOOTING.md",
        ]
    );
}

#[test]
fn test_output_structure_and_literals() {
    let panel = prefix_renderer().render(&DELETION_QUEUE_LINKS).unwrap();
    let sections = top_level(&panel);

    let tags: Vec<&str> = sections.iter().map(|n| element(n).tag.as_str()).collect();
    assert_eq!(tags, vec!["h2", "p", "p", "h3", "ul"]);

    assert_eq!(sections[0].text_content(), "Deletion Queue");
    assert_eq!(sections[1].text_content(), OVERVIEW_TEXT);
    assert_eq!(sections[2].text_content(), INSTRUCTIONS_TEXT);
    assert_eq!(sections[3].text_content(), "Learn more ");

    assert_eq!(element(&sections[1]).attribute("class"), Some("separator-top"));
    assert_eq!(
        element(&sections[2]).attribute("class"),
        Some("separator-bottom")
    );
}

#[test]
fn test_item_count_order_and_titles_match_catalog() {
    let catalog = LinkCatalog::new(vec![
        LinkEntry::owned("  Padded Title  ", "A.md"),
        LinkEntry::owned("Second", "B.md"),
        LinkEntry::owned("Third & <Last>", "C.md"),
        LinkEntry::owned("Fourth", "D.md#section"),
    ]);

    let panel = prefix_renderer().render(&catalog).unwrap();

    let items = panel.find_all("li");
    assert_eq!(items.len(), catalog.len());

    for (link, entry) in links(&panel).iter().zip(catalog.iter()) {
        assert_eq!(link.text_content(), entry.title());
        assert_eq!(
            link.attribute("href"),
            Some(format!("{DOCS_PREFIX}{}", entry.path()).as_str())
        );
        assert_ne!(link.attribute("href"), Some(entry.path()));
    }
}

#[test]
fn test_every_link_opens_new_context_without_opener() {
    let panel = prefix_renderer().render(&DELETION_QUEUE_LINKS).unwrap();

    let links = links(&panel);
    assert_eq!(links.len(), 3);

    for link in links {
        assert_eq!(
            (link.attribute("target"), link.attribute("rel")),
            (Some("_blank"), Some("noopener noreferrer")),
            "link {:?} must open in a new context with noopener and noreferrer",
            link.text_content()
        );
        assert_eq!(link.attribute("class"), Some("learnMoreLink"));
    }
}

#[test]
fn test_empty_catalog_renders_empty_list() {
    let empty = prefix_renderer().render(&LinkCatalog::empty()).unwrap();
    let full = prefix_renderer().render(&DELETION_QUEUE_LINKS).unwrap();

    let empty_sections = top_level(&empty);
    let full_sections = top_level(&full);

    assert_eq!(empty_sections.len(), 5);
    assert_eq!(&empty_sections[..4], &full_sections[..4]);
    assert!(element(&empty_sections[4]).children.is_empty());
    assert!(empty.to_string().ends_with("<ul></ul>"));
}

#[test]
fn test_duplicate_titles_are_not_deduplicated() {
    let catalog = LinkCatalog::new(vec![
        LinkEntry::owned("Troubleshooting", "TROUBLESHOOTING.md"),
        LinkEntry::owned("Troubleshooting", "FAQ.md"),
    ]);

    let panel = prefix_renderer().render(&catalog).unwrap();
    let links = links(&panel);

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].text_content(), "Troubleshooting");
    assert_eq!(links[1].text_content(), "Troubleshooting");
    assert_eq!(
        links[0].attribute("href"),
        Some("https://docs.example.com/TROUBLESHOOTING.md")
    );
    assert_eq!(
        links[1].attribute("href"),
        Some("https://docs.example.com/FAQ.md")
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let renderer = prefix_renderer();

    let first = renderer.render(&DELETION_QUEUE_LINKS).unwrap();
    let second = renderer.render(&DELETION_QUEUE_LINKS).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_production_capabilities_render_expected_markup() {
    let resolver = BaseUrlDocResolver::new("https://docs.example.com").unwrap();
    let icons = AssetIconRenderer::new("/static/icons");
    let renderer = HelpPanelRenderer::new(Arc::new(resolver), Arc::new(icons));

    let html = renderer.render(&DELETION_QUEUE_LINKS).unwrap().to_string();

    assert!(html.starts_with("<h2>Deletion Queue</h2><p class=\"separator-top\">"));
    assert!(html.contains(
        r#"<h3>Learn more <img src="/static/icons/new-window.svg" alt="" class="icon icon-new-window" aria-hidden="true"></h3>"#
    ));
    assert!(html.contains(
        r#"<li><a href="https://docs.example.com/TROUBLESHOOTING.md" target="_blank" rel="noopener noreferrer" class="learnMoreLink">Troubleshooting</a></li>"#
    ));
    assert!(html.contains("choose <strong>Remove</strong>. Once you have started"));
}
