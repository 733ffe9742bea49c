use vecpix_engine::coords::Point;
use vecpix_engine::paint::Color;
use vecpix_engine::raster::RasterSink;

use super::Element;

/// Axis-aligned bounding box of a [`Rect`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    /// Top-left corner.
    pub corner: Point,
    pub width: i32,
    pub height: i32,
}

/// Filled quadrilateral.
///
/// Stored as four corners rather than corner + size so that rotation yields a
/// rotated quad instead of moving an axis-aligned box around. Corners are kept
/// in outline order: top-left, top-right, bottom-right, bottom-left for a rect
/// built with [`from_xywh`](Self::from_xywh).
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub fill: Color,
    corners: [Point; 4],
}

impl Rect {
    /// Builds the quad covering `[x, x+width) × [y, y+height)`.
    ///
    /// Negative sizes are clamped to zero, leaving a degenerate quad that
    /// still transforms but paints nothing.
    pub fn from_xywh(fill: Color, corner: Point, width: i32, height: i32) -> Self {
        let (w, h) = (width.max(0), height.max(0));
        let corners = [
            corner,
            corner + Point::new(w, 0),
            corner + Point::new(w, h),
            corner + Point::new(0, h),
        ];
        Self { fill, corners }
    }

    #[inline]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Axis-aligned bounding box; equals the original `(x, y, width, height)`
    /// as long as the rect has not been rotated by a non-multiple of 90°.
    pub fn bounds(&self) -> Bounds {
        let min_x = self.corners.iter().map(|p| p.x).min().unwrap_or(0);
        let min_y = self.corners.iter().map(|p| p.y).min().unwrap_or(0);
        let max_x = self.corners.iter().map(|p| p.x).max().unwrap_or(0);
        let max_y = self.corners.iter().map(|p| p.y).max().unwrap_or(0);
        Bounds {
            corner: Point::new(min_x, min_y),
            width: max_x.saturating_sub(min_x),
            height: max_y.saturating_sub(min_y),
        }
    }
}

impl Element for Rect {
    fn draw(&self, sink: &mut dyn RasterSink) {
        sink.fill_polygon(&self.corners, self.fill);
    }

    fn translate(&mut self, offset: Point) {
        for c in &mut self.corners {
            *c = c.translate(offset);
        }
    }

    fn rotate(&mut self, degrees: f64, origin: Point) {
        for c in &mut self.corners {
            *c = c.rotate(origin, degrees);
        }
    }

    /// Corner distances scale with the corners; there is no separate size.
    fn scale(&mut self, factor: i32, origin: Point) {
        for c in &mut self.corners {
            *c = c.scale(origin, factor);
        }
    }
}
