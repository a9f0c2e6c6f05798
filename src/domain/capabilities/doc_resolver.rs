//! Documentation URL resolution capability.

/// Errors returned when a documentation path cannot be resolved.
///
/// A resolution failure means the catalog or the documentation base URL is
/// misconfigured; it is not recoverable at render time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid documentation base URL: {0}")]
    InvalidBase(String),

    #[error("Documentation path is empty")]
    EmptyPath,

    #[error("Documentation path '{0}' is an absolute URL")]
    NotRelative(String),

    #[error("Documentation path '{0}' escapes the documentation root")]
    OutsideRoot(String),

    #[error("Failed to resolve documentation path '{path}': {reason}")]
    Join { path: String, reason: String },
}

/// Resolves paths relative to a documentation root into absolute URLs.
///
/// Implementations must be pure and deterministic: the same path always maps
/// to the same URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::docs::BaseUrlDocResolver`] - Joins onto a configured base URL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait DocUrlResolver: Send + Sync {
    /// Returns the absolute URL for `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if `path` cannot be turned into a URL under
    /// the documentation root.
    fn resolve(&self, path: &str) -> Result<String, ResolveError>;
}
