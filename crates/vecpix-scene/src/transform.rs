//! Textual transform lists (`transform="translate(5,5) rotate(45)"`).
//!
//! A list is parsed up front into [`TransformOp`]s and then dispatched one
//! operation at a time to the target's [`Element`] methods. Nothing is folded
//! into a matrix: with integer rounding after every step, applying
//! `rotate` then `scale` is not the same as applying their product.

use vecpix_engine::coords::Point;

use crate::error::{Result, SceneError};
use crate::number::{parse_coord, parse_degrees};
use crate::shapes::Element;

/// A single parsed transform operation.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOp {
    Translate(Point),
    /// `pivot` is set by the three-argument form `rotate(a, cx, cy)` and
    /// overrides the element's pivot.
    Rotate { degrees: f64, pivot: Option<Point> },
    Scale(i32),
}

/// Ordered list of transform operations, applied left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformList {
    ops: Vec<TransformOp>,
}

impl TransformList {
    /// Parses an SVG-style transform list.
    ///
    /// Supported: `translate(tx [ty])`, `rotate(a [cx cy])`, `scale(s [s])`.
    /// Arguments are separated by commas and/or whitespace, as are the
    /// operations themselves. Unknown operations, wrong argument counts,
    /// non-numeric arguments and fractional or non-uniform scale factors
    /// are errors.
    pub fn parse(src: &str) -> Result<Self> {
        let is_sep = |c: char| c == ',' || c.is_whitespace();
        let mut ops = Vec::new();
        let mut rest = src.trim_start_matches(is_sep);

        while !rest.is_empty() {
            let open = rest.find('(').ok_or_else(|| invalid(src, "expected `(`"))?;
            let close = rest[open..]
                .find(')')
                .map(|i| open + i)
                .ok_or_else(|| invalid(src, "missing `)`"))?;

            let name = rest[..open].trim();
            let args: Vec<&str> =
                rest[open + 1..close].split(is_sep).filter(|a| !a.is_empty()).collect();
            ops.push(parse_op(src, name, &args)?);

            rest = rest[close + 1..].trim_start_matches(is_sep);
        }

        Ok(Self { ops })
    }

    #[inline]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies every operation in order. `pivot` is the fixed origin for
    /// `rotate` and `scale`; `translate` ignores it.
    pub fn apply(&self, target: &mut dyn Element, pivot: Point) {
        for op in &self.ops {
            match *op {
                TransformOp::Translate(offset) => target.translate(offset),
                TransformOp::Rotate { degrees, pivot: own } => {
                    target.rotate(degrees, own.unwrap_or(pivot))
                }
                TransformOp::Scale(factor) => target.scale(factor, pivot),
            }
        }
    }
}

/// Parses a `transform-origin` value: two coordinates separated by
/// whitespace and/or a comma.
pub fn parse_origin(src: &str) -> Result<Point> {
    let parts: Vec<&str> = src
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [x, y] => match (parse_coord(x), parse_coord(y)) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(SceneError::InvalidOrigin(src.to_string())),
        },
        _ => Err(SceneError::InvalidOrigin(src.to_string())),
    }
}

// ── internal ──────────────────────────────────────────────────────────────

fn invalid(src: &str, reason: impl Into<String>) -> SceneError {
    SceneError::InvalidTransform { input: src.to_string(), reason: reason.into() }
}

fn parse_op(src: &str, name: &str, args: &[&str]) -> Result<TransformOp> {
    match (name, args) {
        ("translate", [tx]) => Ok(TransformOp::Translate(Point::new(coord(src, tx)?, 0))),
        ("translate", [tx, ty]) => {
            Ok(TransformOp::Translate(Point::new(coord(src, tx)?, coord(src, ty)?)))
        }

        ("rotate", [a]) => Ok(TransformOp::Rotate { degrees: degrees(src, a)?, pivot: None }),
        ("rotate", [a, cx, cy]) => Ok(TransformOp::Rotate {
            degrees: degrees(src, a)?,
            pivot: Some(Point::new(coord(src, cx)?, coord(src, cy)?)),
        }),

        ("scale", [s]) => Ok(TransformOp::Scale(factor(src, s)?)),
        ("scale", [sx, sy]) => {
            let (sx, sy) = (factor(src, sx)?, factor(src, sy)?);
            if sx != sy {
                return Err(invalid(src, format!("non-uniform scale({sx}, {sy}) is not supported")));
            }
            Ok(TransformOp::Scale(sx))
        }

        ("translate" | "rotate" | "scale", _) => {
            Err(invalid(src, format!("{name}() does not take {} argument(s)", args.len())))
        }
        _ => Err(invalid(src, format!("unsupported operation `{name}`"))),
    }
}

fn coord(src: &str, s: &str) -> Result<i32> {
    parse_coord(s).ok_or_else(|| invalid(src, format!("`{s}` is not a number")))
}

fn degrees(src: &str, s: &str) -> Result<f64> {
    parse_degrees(s).ok_or_else(|| invalid(src, format!("`{s}` is not an angle")))
}

/// Scale factors are integers; `2.0` is accepted, `1.5` is not.
fn factor(src: &str, s: &str) -> Result<i32> {
    if let Ok(v) = s.parse::<i32>() {
        return Ok(v);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() <= f64::from(i32::MAX) => {
            Ok(v as i32)
        }
        Ok(_) => Err(invalid(src, format!("fractional scale factor `{s}` is not supported"))),
        Err(_) => Err(invalid(src, format!("`{s}` is not a number"))),
    }
}
