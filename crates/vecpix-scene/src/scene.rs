use vecpix_engine::coords::Size;
use vecpix_engine::paint::Color;
use vecpix_engine::raster::{Canvas, RasterSink};
use vecpix_svg::Document;

use crate::builder::SceneBuilder;
use crate::error::Result;
use crate::shapes::{Element, Shape};

/// A built drawing: canvas dimensions plus top-level shapes in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Size,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Builds a scene from an already loaded document.
    pub fn from_document(doc: &Document) -> Result<Self> {
        SceneBuilder::new().build(doc)
    }

    /// Parses SVG source text and builds it.
    pub fn parse(src: &str) -> Result<Self> {
        let doc = vecpix_svg::parse_str(src)?;
        Self::from_document(&doc)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Paints every shape in document order; later shapes overwrite earlier ones.
    pub fn draw(&self, sink: &mut dyn RasterSink) {
        for shape in &self.shapes {
            shape.draw(sink);
        }
    }

    /// Rasterizes onto a fresh canvas of [`Scene::size`] filled with `background`.
    pub fn render(&self, background: Color) -> Canvas {
        let mut canvas = Canvas::new(self.size, background);
        self.draw(&mut canvas);
        canvas
    }
}
