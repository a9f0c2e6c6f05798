//! Resolver that joins documentation paths onto a base URL.

use crate::domain::capabilities::{DocUrlResolver, ResolveError};
use url::Url;

/// Resolves documentation paths against a fixed base URL.
///
/// The base URL is passed in explicitly (usually from
/// [`crate::config::Config::docs_base_url`]); there is no ambient lookup.
/// Resolved URLs always stay under the base: absolute URLs, scheme-relative
/// paths and `..` segments that climb above the root are rejected.
#[derive(Debug, Clone)]
pub struct BaseUrlDocResolver {
    base: Url,
}

impl BaseUrlDocResolver {
    /// Creates a resolver rooted at `base`.
    ///
    /// A trailing slash is added to the base path when missing so that
    /// relative paths are appended to it instead of replacing its last segment.
    /// Query and fragment are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidBase`] if `base` is not an absolute
    /// HTTP(S) URL.
    pub fn new(base: &str) -> Result<Self, ResolveError> {
        let mut base = Url::parse(base).map_err(|e| ResolveError::InvalidBase(e.to_string()))?;

        match base.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ResolveError::InvalidBase(format!(
                    "unsupported scheme '{other}'"
                )));
            }
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self { base })
    }

    /// The normalized documentation root.
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }
}

impl DocUrlResolver for BaseUrlDocResolver {
    fn resolve(&self, path: &str) -> Result<String, ResolveError> {
        if path.trim().is_empty() {
            return Err(ResolveError::EmptyPath);
        }

        if Url::parse(path).is_ok() {
            return Err(ResolveError::NotRelative(path.to_string()));
        }

        let resolved = self.base.join(path).map_err(|e| ResolveError::Join {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        if !resolved.as_str().starts_with(self.base.as_str()) {
            return Err(ResolveError::OutsideRoot(path.to_string()));
        }

        Ok(resolved.into())
    }
}
