//! Paint model shared between the scene and the raster sink.
//!
//! Scope:
//! - RGBA byte colors with an explicit "no color" value
//! - parsing of SVG color strings (hex and CSS names)

pub mod color;
mod named;

pub use color::Color;
