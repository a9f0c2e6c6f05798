//! Icon renderers.
//!
//! Provides two [`crate::domain::capabilities::IconRenderer`] implementations:
//! - [`AssetIconRenderer`] - `<img>` pointing at an SVG asset per icon kind
//! - [`NullIconRenderer`] - Renders nothing, for hosts without icon assets

mod asset_icons;
mod null_icons;

pub use asset_icons::AssetIconRenderer;
pub use null_icons::NullIconRenderer;
