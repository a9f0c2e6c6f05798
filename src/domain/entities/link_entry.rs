//! Link entry entity describing one piece of linked documentation.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A documentation link shown in a help panel.
///
/// `path` is relative to the documentation root and is opaque here. It must
/// go through a [`crate::domain::capabilities::DocUrlResolver`] before it is
/// used as a hyperlink target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub title: Cow<'static, str>,
    pub path: Cow<'static, str>,
}

impl LinkEntry {
    /// Creates an entry from static strings, usable in `static` catalogs.
    pub const fn new(title: &'static str, path: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            path: Cow::Borrowed(path),
        }
    }

    /// Creates an entry from owned strings, e.g. when loaded from a catalog file.
    pub fn owned(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: Cow::Owned(title.into()),
            path: Cow::Owned(path.into()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
