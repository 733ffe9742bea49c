//! vecpix engine crate.
//!
//! Owns the pieces below the shape model: integer geometry, colors, the
//! CPU raster sink with its PNG encoder, and logger setup.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
