//! CPU rasterization.
//!
//! Responsibilities:
//! - define the [`RasterSink`] contract shapes draw onto
//! - provide aliased rasterizers for lines, ellipses and polygons, one file per primitive
//! - own the pixel buffer ([`Canvas`]) and its PNG encoding
//!
//! Extending the sink:
//! - add a rasterizer module under `raster::*` that reports pixels through a callback
//! - add a provided method on [`RasterSink`] that forwards those pixels to `set_pixel`

mod canvas;
mod ellipse;
mod line;
mod polygon;
mod sink;

pub use canvas::{Canvas, EncodeError};
pub use ellipse::ellipse_spans;
pub use line::line_points;
pub use polygon::polygon_spans;
pub use sink::RasterSink;
