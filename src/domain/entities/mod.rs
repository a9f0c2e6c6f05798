//! Core domain entities.
//!
//! - [`LinkEntry`] - A titled, relative documentation path

pub mod link_entry;

pub use link_entry::LinkEntry;
