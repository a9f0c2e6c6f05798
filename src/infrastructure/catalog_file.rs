//! Loading link catalogs from configuration files.

use crate::domain::catalog::LinkCatalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Reads a JSON catalog file.
///
/// The file holds an array of `{"title": .., "path": ..}` objects in display
/// order. It is read once at startup; the resulting catalog is immutable.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails catalog validation
/// (see [`LinkCatalog::from_json`]).
pub fn load_catalog(path: impl AsRef<Path>) -> Result<LinkCatalog> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

    let catalog = LinkCatalog::from_json(&raw)
        .with_context(|| format!("Invalid catalog file {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        entries = catalog.len(),
        "Loaded help link catalog"
    );

    Ok(catalog)
}
