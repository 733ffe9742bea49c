use crate::coords::{Point, Size};
use crate::paint::Color;

use super::{ellipse, line, polygon};

/// Drawing surface passed to shape `draw` implementations.
///
/// Only [`set_pixel`](Self::set_pixel) is required; the primitives are provided
/// on top of it so every sink rasterizes identically. Implementors may override
/// a primitive (e.g. to record calls in tests) as long as the painted pixels
/// stay the same.
///
/// Contract for `set_pixel`:
/// - coordinates outside `[0, width) × [0, height)` are ignored
/// - a [`Color::NONE`] color paints nothing
pub trait RasterSink {
    /// Pixel dimensions of the surface.
    fn size(&self) -> Size;

    /// Overwrites a single pixel.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// One-pixel-wide line from `from` to `to`, both endpoints included,
    /// clipped to [`size`](Self::size).
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        if color.is_none() {
            return;
        }
        let size = self.size();
        line::line_points(from, to, size, |p| self.set_pixel(p.x, p.y, color));
    }

    /// Solid axis-aligned ellipse. `radius` holds `(rx, ry)`.
    fn fill_ellipse(&mut self, center: Point, radius: Point, color: Color) {
        if color.is_none() {
            return;
        }
        let size = self.size();
        ellipse::ellipse_spans(center, radius, size, |y, x0, x1| {
            for x in x0..x1 {
                self.set_pixel(x, y, color);
            }
        });
    }

    /// Solid polygon (even-odd rule). Self-intersecting outlines are filled
    /// by parity, which is not otherwise specified.
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if color.is_none() {
            return;
        }
        let size = self.size();
        polygon::polygon_spans(points, size, |y, x0, x1| {
            for x in x0..x1 {
                self.set_pixel(x, y, color);
            }
        });
    }
}
