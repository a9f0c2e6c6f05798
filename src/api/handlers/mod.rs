//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod help_tree;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use help_tree::help_tree_handler;
