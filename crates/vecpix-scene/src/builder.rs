use vecpix_engine::coords::{Point, Size};
use vecpix_engine::paint::Color;
use vecpix_svg::{Document, Node};

use crate::error::{Result, SceneError};
use crate::number::parse_coord;
use crate::scene::Scene;
use crate::shapes::{Circle, Ellipse, Group, Line, Polygon, Polyline, Rect, Shape};
use crate::transform::{parse_origin, TransformList};

// ── SceneBuilder ──────────────────────────────────────────────────────────

/// Turns a loaded [`Document`] into a [`Scene`].
///
/// Policy:
/// - unknown tags are skipped together with their subtree
/// - missing numeric attributes read as `0`, missing colors as [`Color::NONE`]
/// - malformed numbers, point lists and transforms abort the whole build
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneBuilder;

impl SceneBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds every top-level shape of `doc`, in document order.
    pub fn build(&self, doc: &Document) -> Result<Scene> {
        let size = self.canvas_size(&doc.root)?;
        let shapes = self.build_children(&doc.root)?;
        log::debug!(
            "built {} top-level shape(s) on a {}x{} canvas",
            shapes.len(),
            size.width,
            size.height
        );
        Ok(Scene { size, shapes })
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn canvas_size(&self, root: &Node) -> Result<Size> {
        let dim = |attr: &'static str| -> Result<u32> {
            let value = root.attr_or_empty(attr);
            match parse_coord(value) {
                Some(v) if v > 0 => Ok(v as u32),
                _ => Err(SceneError::InvalidCanvas { attr, value: value.to_string() }),
            }
        };
        Ok(Size::new(dim("width")?, dim("height")?))
    }

    fn build_children(&self, node: &Node) -> Result<Vec<Shape>> {
        let mut shapes = Vec::with_capacity(node.children().len());
        for child in node.children() {
            if let Some(shape) = self.build_node(child)? {
                shapes.push(shape);
            }
        }
        Ok(shapes)
    }

    fn build_node(&self, node: &Node) -> Result<Option<Shape>> {
        let mut shape: Shape = match node.tag() {
            "ellipse" => self.build_ellipse(node)?.into(),
            "circle" => self.build_circle(node)?.into(),
            "rect" => self.build_rect(node)?.into(),
            "line" => self.build_line(node)?.into(),
            "polyline" => self.build_polyline(node)?.into(),
            "polygon" => self.build_polygon(node)?.into(),
            "g" => self.build_group(node)?.into(),
            other => {
                log::debug!("skipping unsupported <{other}> element");
                return Ok(None);
            }
        };
        self.apply_transform(node, &mut shape)?;
        Ok(Some(shape))
    }

    // ── Ellipse / Circle ──────────────────────────────────────────────────

    fn build_ellipse(&self, node: &Node) -> Result<Ellipse> {
        let center = point_attrs(node, "cx", "cy")?;
        let radius = point_attrs(node, "rx", "ry")?;
        Ok(Ellipse::new(color_attr(node, "fill"), center, radius))
    }

    fn build_circle(&self, node: &Node) -> Result<Circle> {
        let center = point_attrs(node, "cx", "cy")?;
        let radius = int_attr(node, "r")?;
        Ok(Circle::new(color_attr(node, "fill"), center, radius))
    }

    // ── Rect ──────────────────────────────────────────────────────────────

    fn build_rect(&self, node: &Node) -> Result<Rect> {
        let corner = point_attrs(node, "x", "y")?;
        let width = int_attr(node, "width")?;
        let height = int_attr(node, "height")?;
        if width < 0 || height < 0 {
            log::debug!("<rect> with negative size {width}x{height} will not be painted");
        }
        Ok(Rect::from_xywh(color_attr(node, "fill"), corner, width, height))
    }

    // ── Line / Polyline / Polygon ─────────────────────────────────────────

    fn build_line(&self, node: &Node) -> Result<Line> {
        let start = point_attrs(node, "x1", "y1")?;
        let end = point_attrs(node, "x2", "y2")?;
        Ok(Line::new(color_attr(node, "stroke"), start, end))
    }

    fn build_polyline(&self, node: &Node) -> Result<Polyline> {
        let points = parse_points("polyline", node.attr_or_empty("points"))?;
        Polyline::new(color_attr(node, "stroke"), points)
    }

    fn build_polygon(&self, node: &Node) -> Result<Polygon> {
        let points = parse_points("polygon", node.attr_or_empty("points"))?;
        Polygon::new(color_attr(node, "fill"), points)
    }

    // ── Group ─────────────────────────────────────────────────────────────

    /// Children are built (and individually transformed) before the group
    /// exists; the group's own transform is applied afterwards by `build_node`.
    fn build_group(&self, node: &Node) -> Result<Group> {
        Ok(Group::with_children(self.build_children(node)?))
    }

    // ── Transform ─────────────────────────────────────────────────────────

    fn apply_transform(&self, node: &Node, shape: &mut Shape) -> Result<()> {
        let Some(src) = node.attr("transform") else {
            return Ok(());
        };
        let list = TransformList::parse(src)?;
        let pivot = match node.attr("transform-origin") {
            Some(origin) => parse_origin(origin)?,
            None => Point::ZERO,
        };
        log::debug!("<{}> transform {src:?} about ({}, {})", node.tag(), pivot.x, pivot.y);
        list.apply(shape, pivot);
        Ok(())
    }
}

// ── attribute helpers ─────────────────────────────────────────────────────

/// Numeric attribute; absent or empty reads as `0`.
fn int_attr(node: &Node, name: &str) -> Result<i32> {
    match node.attr(name).map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => parse_coord(value).ok_or_else(|| SceneError::InvalidNumber {
            tag: node.tag().to_string(),
            attr: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn point_attrs(node: &Node, x: &str, y: &str) -> Result<Point> {
    Ok(Point::new(int_attr(node, x)?, int_attr(node, y)?))
}

#[inline]
fn color_attr(node: &Node, name: &str) -> Color {
    Color::parse(node.attr_or_empty(name))
}

/// Parses `"x,y x,y ..."`. Every whitespace-separated token must be exactly
/// one comma-separated pair of numbers.
fn parse_points(tag: &'static str, src: &str) -> Result<Vec<Point>> {
    src.split_whitespace()
        .map(|token| {
            token
                .split_once(',')
                .and_then(|(x, y)| Some(Point::new(parse_coord(x)?, parse_coord(y)?)))
                .ok_or_else(|| SceneError::InvalidPoints { tag, token: token.to_string() })
        })
        .collect()
}
