/// Parses a pixel coordinate: an integer, or a decimal rounded to the nearest
/// integer. Surrounding whitespace is ignored; units are not accepted.
pub(crate) fn parse_coord(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i32>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?;
    let v = v.round();
    (v.is_finite() && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX)).then_some(v as i32)
}

/// Parses an angle in degrees. Must be finite.
pub(crate) fn parse_degrees(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords() {
        assert_eq!(parse_coord("42"), Some(42));
        assert_eq!(parse_coord(" -7 "), Some(-7));
        assert_eq!(parse_coord("+3"), Some(3));
        assert_eq!(parse_coord("10.4"), Some(10));
        assert_eq!(parse_coord("10.5"), Some(11));
        assert_eq!(parse_coord("-2.5"), Some(-3));
    }

    #[test]
    fn coords_reject_garbage() {
        for bad in ["", "abc", "10px", "1,2", "NaN", "inf", "1e40"] {
            assert_eq!(parse_coord(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn degrees() {
        assert_eq!(parse_degrees("45"), Some(45.0));
        assert_eq!(parse_degrees("-12.5"), Some(-12.5));
        assert_eq!(parse_degrees("inf"), None);
        assert_eq!(parse_degrees("x"), None);
    }
}
