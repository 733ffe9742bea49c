use vecpix_engine::coords::Point;
use vecpix_engine::paint::Color;
use vecpix_engine::raster::RasterSink;

use super::Element;

/// Filled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub fill: Color,
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    #[inline]
    pub fn new(fill: Color, center: Point, radius: i32) -> Self {
        Self { fill, center, radius }
    }
}

impl Element for Circle {
    fn draw(&self, sink: &mut dyn RasterSink) {
        sink.fill_ellipse(self.center, Point::new(self.radius, self.radius), self.fill);
    }

    fn translate(&mut self, offset: Point) {
        self.center = self.center.translate(offset);
    }

    fn rotate(&mut self, degrees: f64, origin: Point) {
        self.center = self.center.rotate(origin, degrees);
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        self.center = self.center.scale(origin, factor);
        self.radius = self.radius.saturating_mul(factor);
    }
}
