use crate::coords::{Point, Size};

/// Computes the horizontal spans of a polygon with the even-odd rule.
///
/// Rows are sampled at pixel centres (`y + 0.5`) and a pixel is covered when
/// its centre lies inside, so integer edges are half-open: an axis-aligned
/// quad with corners `(x, y)` and `(x + w, y + h)` covers exactly
/// `[x, x+w) × [y, y+h)`. The outline is closed implicitly. `emit(y, x0, x1)`
/// receives half-open spans clipped to `size`.
pub fn polygon_spans(points: &[Point], size: Size, mut emit: impl FnMut(i32, i32, i32)) {
    if points.len() < 3 || size.is_empty() {
        return;
    }

    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(0)
        .min(size.height as i32);
    let width = size.width as i32;

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for y in min_y..max_y {
        let sample = f64::from(y) + 0.5;
        crossings.clear();

        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (ay, by) = (f64::from(a.y), f64::from(b.y));
            let spans_row = (ay <= sample && sample < by) || (by <= sample && sample < ay);
            if spans_row {
                let t = (sample - ay) / (by - ay);
                crossings.push(f64::from(a.x) + t * (f64::from(b.x) - f64::from(a.x)));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let x0 = ((pair[0] - 0.5).ceil() as i32).max(0);
            let x1 = ((pair[1] - 0.5).ceil() as i32).min(width);
            if x0 < x1 {
                emit(y, x0, x1);
            }
        }
    }
}
