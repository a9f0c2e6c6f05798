//! Web layer serving the help panel as HTML.
//!
//! Uses Askama templates for the page shell; the panel markup itself comes
//! from [`crate::render`].
//!
//! # Modules
//!
//! - [`handlers`] - Page and fragment handlers
//! - [`routes`] - Help route configuration

pub mod handlers;
pub mod routes;
