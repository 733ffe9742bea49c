use vecpix_engine::coords::Point;
use vecpix_engine::paint::Color;
use vecpix_engine::raster::RasterSink;

use super::Element;

/// Straight one-pixel segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub stroke: Color,
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub fn new(stroke: Color, start: Point, end: Point) -> Self {
        Self { stroke, start, end }
    }
}

impl Element for Line {
    fn draw(&self, sink: &mut dyn RasterSink) {
        sink.draw_line(self.start, self.end, self.stroke);
    }

    fn translate(&mut self, offset: Point) {
        self.start = self.start.translate(offset);
        self.end = self.end.translate(offset);
    }

    fn rotate(&mut self, degrees: f64, origin: Point) {
        self.start = self.start.rotate(origin, degrees);
        self.end = self.end.rotate(origin, degrees);
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        self.start = self.start.scale(origin, factor);
        self.end = self.end.scale(origin, factor);
    }
}
