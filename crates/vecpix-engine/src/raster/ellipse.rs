use crate::coords::{Point, Size};

/// Computes the horizontal pixel spans covered by an axis-aligned ellipse.
///
/// Pixel `(x, y)` is inside iff `(x-cx)²·ry² + (y-cy)²·rx² ≤ rx²·ry²`.
/// `emit(y, x0, x1)` receives half-open spans `[x0, x1)`, already clipped to
/// `size`. A zero radius on either axis covers nothing; negative radii are
/// treated by magnitude.
pub fn ellipse_spans(
    center: Point,
    radius: Point,
    size: Size,
    mut emit: impl FnMut(i32, i32, i32),
) {
    let rx = i64::from(radius.x).abs();
    let ry = i64::from(radius.y).abs();
    if rx == 0 || ry == 0 || size.is_empty() {
        return;
    }

    let width = i64::from(size.width);
    let height = i64::from(size.height);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let y_start = (cy - ry).max(0);
    let y_end = (cy + ry).min(height - 1);
    if y_start > y_end {
        return;
    }

    // rx²·ry² reaches 2^124 for i32 radii.
    let (rx2, ry2) = (i128::from(rx * rx), i128::from(ry * ry));
    let limit = rx2 * ry2;
    for y in y_start..=y_end {
        let dy = i128::from(y - cy);
        let rem = limit - dy * dy * rx2;
        if rem < 0 {
            continue;
        }
        // rem / ry2 <= rx², which fits in u64.
        let half = ((rem / ry2) as u64).isqrt() as i64;
        let x0 = (cx - half).max(0);
        let x1 = (cx + half + 1).min(width);
        if x0 < x1 {
            emit(y as i32, x0 as i32, x1 as i32);
        }
    }
}
