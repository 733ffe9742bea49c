//! Coordinate and geometry types shared by the raster sink and the scene.
//!
//! Canonical space:
//! - Integer pixels
//! - Origin top-left
//! - +X right, +Y down

mod point;
mod size;

pub use point::Point;
pub use size::Size;
