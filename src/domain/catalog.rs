//! Ordered catalog of documentation links.

use crate::domain::entities::LinkEntry;
use std::borrow::Cow;

/// Errors raised while building a catalog from configuration data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Catalog entry {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Catalog entry {index} ('{title}') has an empty path")]
    EmptyPath { index: usize, title: String },
}

static DELETION_QUEUE_ENTRIES: [LinkEntry; 3] = [
    LinkEntry::new("Working with the Deletion Queue", "OVERVIEW.md#matches"),
    LinkEntry::new(
        "Add a Match to the Deletion Queue",
        "OVERVIEW.md#adding-a-match-to-the-queue",
    ),
    LinkEntry::new("Troubleshooting", "TROUBLESHOOTING.md"),
];

/// Documentation links for the Deletion Queue help panel, in display order.
pub static DELETION_QUEUE_LINKS: LinkCatalog = LinkCatalog::from_static(&DELETION_QUEUE_ENTRIES);

/// An immutable, ordered list of [`LinkEntry`] values.
///
/// Iteration order is declaration order. Duplicates are kept as-is and an
/// empty catalog is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCatalog {
    entries: Cow<'static, [LinkEntry]>,
}

impl LinkCatalog {
    /// Wraps a static slice without copying.
    pub const fn from_static(entries: &'static [LinkEntry]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    pub fn new(entries: Vec<LinkEntry>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parses a JSON array of `{"title": .., "path": ..}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidJson`] for malformed input and
    /// [`CatalogError::EmptyTitle`] / [`CatalogError::EmptyPath`] when an entry
    /// has a blank field.
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        let entries: Vec<LinkEntry> = serde_json::from_str(input)?;

        for (index, entry) in entries.iter().enumerate() {
            if entry.title().trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if entry.path().trim().is_empty() {
                return Err(CatalogError::EmptyPath {
                    index,
                    title: entry.title().to_string(),
                });
            }
        }

        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LinkCatalog {
    fn default() -> Self {
        DELETION_QUEUE_LINKS.clone()
    }
}

impl<'a> IntoIterator for &'a LinkCatalog {
    type Item = &'a LinkEntry;
    type IntoIter = std::slice::Iter<'a, LinkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_queue_links_order() {
        let titles: Vec<&str> = DELETION_QUEUE_LINKS.iter().map(LinkEntry::title).collect();

        assert_eq!(
            titles,
            vec![
                "Working with the Deletion Queue",
                "Add a Match to the Deletion Queue",
                "Troubleshooting",
            ]
        );
        assert_eq!(DELETION_QUEUE_LINKS.entries()[2].path(), "TROUBLESHOOTING.md");
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = LinkCatalog::empty();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let catalog = LinkCatalog::new(vec![
            LinkEntry::owned("Guide", "A.md"),
            LinkEntry::owned("Guide", "B.md"),
        ]);

        assert_eq!(catalog.len(), 2);
        let paths: Vec<&str> = catalog.iter().map(LinkEntry::path).collect();
        assert_eq!(paths, vec!["A.md", "B.md"]);
    }

    #[test]
    fn test_from_json_preserves_order() {
        let catalog = LinkCatalog::from_json(
            r#"[
                {"title": "Second", "path": "B.md"},
                {"title": "First", "path": "A.md"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.entries()[0].title(), "Second");
        assert_eq!(catalog.entries()[1].title(), "First");
    }

    #[test]
    fn test_from_json_rejects_blank_fields() {
        let err = LinkCatalog::from_json(r#"[{"title": " ", "path": "A.md"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle { index: 0 }));

        let err = LinkCatalog::from_json(
            r#"[{"title": "Ok", "path": "A.md"}, {"title": "Missing", "path": ""}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPath { index: 1, .. }));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = LinkCatalog::from_json(r#"{"title": "not an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidJson(_)));
    }

    #[test]
    fn test_default_is_deletion_queue_catalog() {
        assert_eq!(LinkCatalog::default(), DELETION_QUEUE_LINKS);
    }
}
