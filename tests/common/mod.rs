#![allow(dead_code)]

use deletion_queue_help::domain::capabilities::{DocUrlResolver, ResolveError};
use deletion_queue_help::domain::catalog::LinkCatalog;
use deletion_queue_help::infrastructure::icons::NullIconRenderer;
use deletion_queue_help::render::HelpPanelRenderer;
use deletion_queue_help::state::AppState;
use std::sync::Arc;

pub const DOCS_PREFIX: &str = "https://docs.example.com/";

/// Resolves by plain string concatenation onto a prefix.
pub struct PrefixResolver(pub &'static str);

impl DocUrlResolver for PrefixResolver {
    fn resolve(&self, path: &str) -> Result<String, ResolveError> {
        Ok(format!("{}{}", self.0, path))
    }
}

/// Fails for one specific path and resolves everything else with [`DOCS_PREFIX`].
pub struct FailingResolver(pub &'static str);

impl DocUrlResolver for FailingResolver {
    fn resolve(&self, path: &str) -> Result<String, ResolveError> {
        if path == self.0 {
            Err(ResolveError::OutsideRoot(path.to_string()))
        } else {
            Ok(format!("{DOCS_PREFIX}{path}"))
        }
    }
}

pub fn prefix_renderer() -> HelpPanelRenderer<PrefixResolver, NullIconRenderer> {
    HelpPanelRenderer::new(
        Arc::new(PrefixResolver(DOCS_PREFIX)),
        Arc::new(NullIconRenderer::new()),
    )
}

pub fn create_test_state(catalog: LinkCatalog) -> AppState {
    AppState::new(
        Arc::new(PrefixResolver(DOCS_PREFIX)),
        Arc::new(NullIconRenderer::new()),
        catalog,
    )
}

pub fn create_failing_state(catalog: LinkCatalog, failing_path: &'static str) -> AppState {
    AppState::new(
        Arc::new(FailingResolver(failing_path)),
        Arc::new(NullIconRenderer::new()),
        catalog,
    )
}
