use core::ops::{Add, Mul, Neg, Sub};

/// 2D point in integer pixels.
///
/// A plain value type: every transform returns a new point and leaves `self`
/// untouched, so shapes reassign their fields (`self.center = self.center.translate(o)`).
/// Arithmetic saturates at the `i32` range instead of overflowing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offsets the point by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Point {
        self + offset
    }

    /// Rotates the point around `origin` by `degrees`.
    ///
    /// Positive angles turn clockwise on screen (y grows downwards). The
    /// rotated offset is rounded to the nearest pixel, so two half-turns are
    /// not guaranteed to land exactly where one full turn does.
    pub fn rotate(self, origin: Point, degrees: f64) -> Point {
        let d = self - origin;
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (dx, dy) = (d.x as f64, d.y as f64);
        let rx = (dx * cos - dy * sin).round() as i32;
        let ry = (dx * sin + dy * cos).round() as i32;
        origin + Point::new(rx, ry)
    }

    /// Scales the point's distance from `origin` by an integer `factor`.
    #[inline]
    pub fn scale(self, origin: Point, factor: i32) -> Point {
        origin + (self - origin) * factor
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl Mul<i32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x.saturating_mul(rhs), self.y.saturating_mul(rhs))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point { Point::new(x, y) }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_adds_offset() {
        assert_eq!(p(3, 4).translate(p(10, -2)), p(13, 2));
    }

    #[test]
    fn translate_round_trips() {
        let o = p(-7, 12);
        assert_eq!(p(5, 5).translate(o).translate(-o), p(5, 5));
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_zero_and_full_turn_are_identity() {
        let origin = p(17, -3);
        for pt in [p(0, 0), p(10, 0), p(-4, 9), p(123, 456)] {
            assert_eq!(pt.rotate(origin, 0.0), pt);
            assert_eq!(pt.rotate(origin, 360.0), pt);
        }
    }

    #[test]
    fn rotate_half_turn_reflects_through_origin() {
        let origin = p(5, 5);
        for pt in [p(0, 0), p(10, 0), p(5, 10)] {
            assert_eq!(pt.rotate(origin, 180.0), p(10 - pt.x, 10 - pt.y));
        }
    }

    #[test]
    fn rotate_quarter_turn_is_clockwise_on_screen() {
        // +x axis turns into +y axis, which points down.
        assert_eq!(p(10, 0).rotate(Point::ZERO, 90.0), p(0, 10));
        assert_eq!(p(0, 10).rotate(Point::ZERO, 90.0), p(-10, 0));
    }

    #[test]
    fn rotate_rounds_to_nearest_pixel() {
        // 10·cos45 = 7.07 → 7
        assert_eq!(p(10, 0).rotate(Point::ZERO, 45.0), p(7, 7));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_about_origin() {
        assert_eq!(p(3, -4).scale(Point::ZERO, 3), p(9, -12));
    }

    #[test]
    fn scale_about_pivot_keeps_pivot_fixed() {
        let pivot = p(10, 10);
        assert_eq!(pivot.scale(pivot, 5), pivot);
        assert_eq!(p(12, 7).scale(pivot, 2), p(14, 4));
    }

    #[test]
    fn scale_by_one_is_identity() {
        assert_eq!(p(8, 9).scale(p(1, 2), 1), p(8, 9));
    }

    // ── saturation ────────────────────────────────────────────────────────

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(p(2_000_000_000, 0).translate(p(2_000_000_000, -1)), p(i32::MAX, -1));
        assert_eq!(p(100_000, -100_000).scale(Point::ZERO, 100_000), p(i32::MAX, i32::MIN));
        assert_eq!(-p(i32::MIN, 0), p(i32::MAX, 0));
        assert_eq!(p(i32::MIN, 0) - p(1, 0), p(i32::MIN, 0));
    }

    #[test]
    fn rotate_far_points_stays_in_range() {
        // offset saturates to (MAX, MAX), turns into (-MAX, MAX), then lands
        // on the pivot with x clamped
        let far = p(i32::MAX, i32::MAX).rotate(p(i32::MIN, i32::MIN), 90.0);
        assert_eq!(far, p(i32::MIN, -1));
    }
}
