use vecpix_engine::coords::Point;
use vecpix_engine::raster::RasterSink;

use super::{Element, Shape};

/// Ordered collection of owned shapes.
///
/// A group has no geometry of its own. Drawing paints children in insertion
/// order (later children on top); every transform is forwarded unchanged to
/// each child, recursively, so a group transform lands on the leaves exactly
/// as if each leaf had been transformed by hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    children: Vec<Shape>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Shape>) -> Self {
        Self { children }
    }

    /// Appends a child; it is drawn after (on top of) the existing ones.
    pub fn push(&mut self, child: impl Into<Shape>) {
        self.children.push(child.into());
    }

    #[inline]
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn into_children(self) -> Vec<Shape> {
        self.children
    }
}

impl Element for Group {
    fn draw(&self, sink: &mut dyn RasterSink) {
        for child in &self.children {
            child.draw(sink);
        }
    }

    fn translate(&mut self, offset: Point) {
        for child in &mut self.children {
            child.translate(offset);
        }
    }

    fn rotate(&mut self, degrees: f64, origin: Point) {
        for child in &mut self.children {
            child.rotate(degrees, origin);
        }
    }

    fn scale(&mut self, factor: i32, origin: Point) {
        for child in &mut self.children {
            child.scale(factor, origin);
        }
    }
}
