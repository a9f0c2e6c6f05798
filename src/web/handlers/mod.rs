//! HTML rendering handlers for help pages.

mod help;

pub use help::{HelpPageTemplate, help_fragment_handler, help_page_handler};
