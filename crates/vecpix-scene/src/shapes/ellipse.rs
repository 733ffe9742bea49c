use vecpix_engine::coords::Point;
use vecpix_engine::paint::Color;
use vecpix_engine::raster::RasterSink;

use super::Element;

/// Axis-aligned filled ellipse.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub fill: Color,
    pub center: Point,
    /// `(rx, ry)`.
    pub radius: Point,
}

impl Ellipse {
    #[inline]
    pub fn new(fill: Color, center: Point, radius: Point) -> Self {
        Self { fill, center, radius }
    }
}

impl Element for Ellipse {
    fn draw(&self, sink: &mut dyn RasterSink) {
        sink.fill_ellipse(self.center, self.radius, self.fill);
    }

    fn translate(&mut self, offset: Point) {
        self.center = self.center.translate(offset);
    }

    /// Only the center moves; the radii stay axis-aligned.
    fn rotate(&mut self, degrees: f64, origin: Point) {
        self.center = self.center.rotate(origin, degrees);
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        self.center = self.center.scale(origin, factor);
        self.radius = self.radius * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{p, Call, RecordingSink, RED};

    #[test]
    fn draw_fills_ellipse() {
        let mut sink = RecordingSink::default();
        Ellipse::new(RED, p(20, 10), p(8, 3)).draw(&mut sink);
        assert_eq!(sink.calls, vec![Call::Ellipse(p(20, 10), p(8, 3), RED)]);
    }

    #[test]
    fn scale_grows_both_radii() {
        let mut e = Ellipse::new(RED, p(10, 10), p(4, 2));
        e.scale(3, p(0, 0));
        assert_eq!(e.center, p(30, 30));
        assert_eq!(e.radius, p(12, 6));
    }

    #[test]
    fn rotate_keeps_radii() {
        let mut e = Ellipse::new(RED, p(10, 0), p(4, 2));
        e.rotate(90.0, p(0, 0));
        assert_eq!(e.center, p(0, 10));
        assert_eq!(e.radius, p(4, 2));
    }
}
