use crate::coords::{Point, Size};

/// Walks the pixels of the segment `from → to` that fall inside `size`.
///
/// Bresenham stepping: one pixel per unit along the major axis, with the minor
/// coordinate rounded to the nearest pixel (ties away from `from`). The kept
/// pixels are 8-connected and both endpoints are visited when on the canvas.
/// Pixels are visited in order starting from `from`, so a segment and its
/// reverse may differ by a pixel where the rounding ties.
///
/// The major-axis range is clipped to the canvas before walking, so the cost
/// is bounded by the canvas size however long the segment is.
pub fn line_points(from: Point, to: Point, size: Size, mut visit: impl FnMut(Point)) {
    if size.is_empty() {
        return;
    }
    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let (dx, dy) = (i64::from(to.x) - x0, i64::from(to.y) - y0);
    let (width, height) = (i64::from(size.width), i64::from(size.height));

    // (start, delta, extent) along the major and minor axes
    let steep = dy.abs() > dx.abs();
    let ((m0, dm, m_len), (n0, dn, n_len)) = if steep {
        ((y0, dy, height), (x0, dx, width))
    } else {
        ((x0, dx, width), (y0, dy, height))
    };
    let major = dm.abs();
    let (sm, sn) = (dm.signum(), dn.signum());
    let minor = i128::from(dn.abs());

    // steps k whose major coordinate m0 + sm·k lies in [0, m_len)
    let (lo, hi) = if sm >= 0 { (-m0, m_len - 1 - m0) } else { (m0 - (m_len - 1), m0) };
    for k in lo.max(0)..=hi.min(major) {
        let offset = if major == 0 {
            0
        } else {
            // round(k · minor / major), ties up; ≤ minor, so it fits back in i64
            ((2 * i128::from(k) * minor + i128::from(major)) / (2 * i128::from(major))) as i64
        };
        let n = n0 + sn * offset;
        if !(0..n_len).contains(&n) {
            continue;
        }
        let m = m0 + sm * k;
        let (x, y) = if steep { (n, m) } else { (m, n) };
        visit(Point::new(x as i32, y as i32));
    }
}
