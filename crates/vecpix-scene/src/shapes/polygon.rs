use vecpix_engine::coords::Point;
use vecpix_engine::paint::Color;
use vecpix_engine::raster::RasterSink;

use super::Element;
use crate::error::{Result, SceneError};

/// Closed outline. The interior is not filled; `fill` is the outline color.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub fill: Color,
    points: Vec<Point>,
}

impl Polygon {
    pub const MIN_POINTS: usize = 3;

    /// Fails with [`SceneError::TooFewPoints`] for fewer than three points.
    pub fn new(fill: Color, points: Vec<Point>) -> Result<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(SceneError::TooFewPoints {
                tag: "polygon",
                min: Self::MIN_POINTS,
                got: points.len(),
            });
        }
        Ok(Self { fill, points })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Element for Polygon {
    /// `n` segments, the last one closing back to the first point.
    fn draw(&self, sink: &mut dyn RasterSink) {
        for pair in self.points.windows(2) {
            sink.draw_line(pair[0], pair[1], self.fill);
        }
        if let (Some(&last), Some(&first)) = (self.points.last(), self.points.first()) {
            sink.draw_line(last, first, self.fill);
        }
    }

    fn translate(&mut self, offset: Point) {
        for p in &mut self.points {
            *p = p.translate(offset);
        }
    }

    fn rotate(&mut self, degrees: f64, origin: Point) {
        for p in &mut self.points {
            *p = p.rotate(origin, degrees);
        }
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        for p in &mut self.points {
            *p = p.scale(origin, factor);
        }
    }
}
