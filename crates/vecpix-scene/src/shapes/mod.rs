//! The shape hierarchy.
//!
//! Every variant is its own struct implementing [`Element`]; [`Shape`] is the
//! closed set of variants and dispatches by `match`.
//!
//! Extending the hierarchy:
//! - add a new shape module under `shapes::*` implementing [`Element`]
//! - add a variant here and to both `as_element` helpers
//! - teach `SceneBuilder` the tag that produces it

mod circle;
mod ellipse;
mod group;
mod line;
mod polygon;
mod polyline;
mod rect;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use group::Group;
pub use line::Line;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use rect::{Bounds, Rect};

use vecpix_engine::coords::Point;
use vecpix_engine::raster::RasterSink;

// ── Element trait ─────────────────────────────────────────────────────────

/// Drawing and geometric transforms shared by all shapes.
///
/// Transforms mutate the shape in place and are applied one at a time; there
/// is no accumulated matrix. A group forwards each call unchanged to its
/// children, so nested transforms compose by repeated application.
pub trait Element {
    /// Paints the shape onto `sink`. Never mutates the shape.
    fn draw(&self, sink: &mut dyn RasterSink);

    /// Moves every geometry point by `offset`.
    fn translate(&mut self, offset: Point);

    /// Rotates every geometry point around `origin` by `degrees` (clockwise on screen).
    fn rotate(&mut self, degrees: f64, origin: Point);

    /// Scales every geometry point's distance from `origin` by `factor`,
    /// along with size fields such as radii.
    fn scale(&mut self, factor: i32, origin: Point);
}

// ── Shape ─────────────────────────────────────────────────────────────────

/// Any drawable node of the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Ellipse(Ellipse),
    Circle(Circle),
    Rect(Rect),
    Line(Line),
    Polyline(Polyline),
    Polygon(Polygon),
    Group(Group),
}

impl Shape {
    /// Tag name this shape is built from.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Ellipse(_) => "ellipse",
            Shape::Circle(_) => "circle",
            Shape::Rect(_) => "rect",
            Shape::Line(_) => "line",
            Shape::Polyline(_) => "polyline",
            Shape::Polygon(_) => "polygon",
            Shape::Group(_) => "g",
        }
    }

    fn as_element(&self) -> &dyn Element {
        match self {
            Shape::Ellipse(s) => s,
            Shape::Circle(s) => s,
            Shape::Rect(s) => s,
            Shape::Line(s) => s,
            Shape::Polyline(s) => s,
            Shape::Polygon(s) => s,
            Shape::Group(s) => s,
        }
    }

    fn as_element_mut(&mut self) -> &mut dyn Element {
        match self {
            Shape::Ellipse(s) => s,
            Shape::Circle(s) => s,
            Shape::Rect(s) => s,
            Shape::Line(s) => s,
            Shape::Polyline(s) => s,
            Shape::Polygon(s) => s,
            Shape::Group(s) => s,
        }
    }
}

impl Element for Shape {
    #[inline]
    fn draw(&self, sink: &mut dyn RasterSink) {
        self.as_element().draw(sink)
    }

    #[inline]
    fn translate(&mut self, offset: Point) {
        self.as_element_mut().translate(offset)
    }

    #[inline]
    fn rotate(&mut self, degrees: f64, origin: Point) {
        self.as_element_mut().rotate(degrees, origin)
    }

    #[inline]
    fn scale(&mut self, factor: i32, origin: Point) {
        self.as_element_mut().scale(factor, origin)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                #[inline]
                fn from(s: $variant) -> Self {
                    Shape::$variant(s)
                }
            }
        )*
    };
}

impl_from_variant!(Ellipse, Circle, Rect, Line, Polyline, Polygon, Group);
