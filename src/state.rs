//! Shared application state for the preview host.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::capabilities::{DocUrlResolver, IconRenderer};
use crate::domain::catalog::LinkCatalog;
use crate::infrastructure::catalog_file::load_catalog;
use crate::infrastructure::docs::BaseUrlDocResolver;
use crate::infrastructure::icons::AssetIconRenderer;
use crate::render::{HelpPanelRenderer, SharedPanelRenderer};

/// State injected into every handler.
///
/// The catalog is configuration-time data: it is built once and never
/// mutated while the server runs.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<SharedPanelRenderer>,
    pub catalog: Arc<LinkCatalog>,
}

impl AppState {
    pub fn new(
        resolver: Arc<dyn DocUrlResolver>,
        icons: Arc<dyn IconRenderer>,
        catalog: LinkCatalog,
    ) -> Self {
        Self {
            renderer: Arc::new(HelpPanelRenderer::new(resolver, icons)),
            catalog: Arc::new(catalog),
        }
    }

    /// Builds the production capabilities and catalog from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the docs base URL is invalid or the catalog file
    /// cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolver = BaseUrlDocResolver::new(&config.docs_base_url)
            .context("Failed to configure documentation resolver")?;
        let icons = AssetIconRenderer::new(config.icon_base_path.clone());

        let catalog = match &config.catalog_file {
            Some(path) => load_catalog(path)?,
            None => LinkCatalog::default(),
        };

        Ok(Self::new(Arc::new(resolver), Arc::new(icons), catalog))
    }
}
