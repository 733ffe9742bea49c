//! Test doubles shared by the shape and builder tests.

use vecpix_engine::coords::{Point, Size};
use vecpix_engine::paint::Color;
use vecpix_engine::raster::RasterSink;

pub(crate) const RED: Color = Color::rgb(255, 0, 0);
pub(crate) const BLUE: Color = Color::rgb(0, 0, 255);

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Pixel(i32, i32, Color),
    Line(Point, Point, Color),
    Ellipse(Point, Point, Color),
    Polygon(Vec<Point>, Color),
}

/// Sink that records primitive calls instead of rasterizing them.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub calls: Vec<Call>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Line(a, b, _) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }
}

impl RasterSink for RecordingSink {
    fn size(&self) -> Size {
        Size::new(1000, 1000)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.calls.push(Call::Pixel(x, y, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.calls.push(Call::Line(from, to, color));
    }

    fn fill_ellipse(&mut self, center: Point, radius: Point, color: Color) {
        self.calls.push(Call::Ellipse(center, radius, color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.calls.push(Call::Polygon(points.to_vec(), color));
    }
}

pub(crate) fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}
