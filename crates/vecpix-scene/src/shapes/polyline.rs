use vecpix_engine::coords::Point;
use vecpix_engine::paint::Color;
use vecpix_engine::raster::RasterSink;

use super::Element;
use crate::error::{Result, SceneError};

/// Open chain of segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub stroke: Color,
    points: Vec<Point>,
}

impl Polyline {
    pub const MIN_POINTS: usize = 2;

    /// Fails with [`SceneError::TooFewPoints`] for fewer than two points.
    pub fn new(stroke: Color, points: Vec<Point>) -> Result<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(SceneError::TooFewPoints {
                tag: "polyline",
                min: Self::MIN_POINTS,
                got: points.len(),
            });
        }
        Ok(Self { stroke, points })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Element for Polyline {
    /// `n - 1` segments; the chain is not closed.
    fn draw(&self, sink: &mut dyn RasterSink) {
        for pair in self.points.windows(2) {
            sink.draw_line(pair[0], pair[1], self.stroke);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{p, RecordingSink, BLUE};

    #[test]
    fn draws_n_minus_one_open_segments() {
        let pts = vec![p(0, 0), p(10, 0), p(10, 10), p(0, 10)];
        let mut sink = RecordingSink::default();
        Polyline::new(BLUE, pts).unwrap().draw(&mut sink);
        assert_eq!(
            sink.lines(),
            vec![(p(0, 0), p(10, 0)), (p(10, 0), p(10, 10)), (p(10, 10), p(0, 10))]
        );
    }

    #[test]
    fn two_points_is_one_segment() {
        let mut sink = RecordingSink::default();
        Polyline::new(BLUE, vec![p(1, 1), p(2, 2)]).unwrap().draw(&mut sink);
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn rejects_short_chains() {
        assert!(matches!(
            Polyline::new(BLUE, vec![p(1, 1)]),
            Err(SceneError::TooFewPoints { tag: "polyline", min: 2, got: 1 })
        ));
        assert!(Polyline::new(BLUE, Vec::new()).is_err());
    }

    #[test]
    fn transforms_keep_point_count() {
        let mut l = Polyline::new(BLUE, vec![p(0, 0), p(3, 4), p(6, 0)]).unwrap();
        l.rotate(45.0, p(1, 1));
        l.scale(5, p(2, 2));
        assert_eq!(l.points().len(), 3);
    }
}
