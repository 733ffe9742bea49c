use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

use crate::coords::Size;
use crate::paint::Color;

use super::RasterSink;

/// Failure to persist a [`Canvas`].
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("cannot encode an empty {0}x{1} canvas")]
    Empty(u32, u32),

    #[error("failed to write image `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Owned RGBA pixel buffer implementing [`RasterSink`].
///
/// Pixels are overwritten, never blended: a shape drawn later replaces what
/// was there before.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a canvas with every pixel set to `background`.
    pub fn new(size: Size, background: Color) -> Self {
        let image = RgbaImage::from_pixel(size.width, size.height, Rgba(background.to_rgba_u8()));
        Self { image }
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.size().contains(x, y) {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x as u32, y as u32).0;
        Some(Color::rgba(r, g, b, a))
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Writes the canvas to `path` as PNG, whatever the file extension.
    pub fn encode_to_file(&self, path: impl AsRef<Path>) -> Result<(), EncodeError> {
        let path = path.as_ref();
        let size = self.size();
        if size.is_empty() {
            return Err(EncodeError::Empty(size.width, size.height));
        }
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| EncodeError::Write { path: path.to_path_buf(), source })?;
        log::debug!("wrote {}x{} png to {}", size.width, size.height, path.display());
        Ok(())
    }
}

impl RasterSink for Canvas {
    #[inline]
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if color.is_none() || !self.size().contains(x, y) {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, Rgba(color.to_rgba_u8()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;

    const RED: Color = Color::rgb(255, 0, 0);

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(Size::new(w, h), Color::WHITE)
    }

    fn count(c: &Canvas, color: Color) -> usize {
        c.as_image().pixels().filter(|p| p.0 == color.to_rgba_u8()).count()
    }

    // ── set_pixel ─────────────────────────────────────────────────────────

    #[test]
    fn starts_filled_with_background() {
        let c = Canvas::new(Size::new(4, 3), Color::BLACK);
        assert_eq!(count(&c, Color::BLACK), 12);
    }

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut c = canvas(4, 4);
        c.set_pixel(-1, 0, RED);
        c.set_pixel(0, 4, RED);
        c.set_pixel(4, 0, RED);
        assert_eq!(count(&c, RED), 0);
        c.set_pixel(3, 3, RED);
        assert_eq!(c.pixel(3, 3), Some(RED));
    }

    #[test]
    fn none_color_paints_nothing() {
        let mut c = canvas(4, 4);
        c.set_pixel(1, 1, Color::NONE);
        c.draw_line(Point::new(0, 0), Point::new(3, 3), Color::NONE);
        c.fill_polygon(&[Point::new(0, 0), Point::new(4, 0), Point::new(4, 4)], Color::NONE);
        assert_eq!(count(&c, Color::WHITE), 16);
    }

    // ── primitives ────────────────────────────────────────────────────────

    #[test]
    fn draw_line_paints_endpoints() {
        let mut c = canvas(10, 10);
        c.draw_line(Point::new(1, 1), Point::new(8, 4), RED);
        assert_eq!(c.pixel(1, 1), Some(RED));
        assert_eq!(c.pixel(8, 4), Some(RED));
        assert_eq!(count(&c, RED), 8);
    }

    #[test]
    fn fill_ellipse_leaves_outside_untouched() {
        let mut c = canvas(100, 100);
        c.fill_ellipse(Point::new(50, 50), Point::new(10, 10), RED);
        assert_eq!(c.pixel(50, 50), Some(RED));
        assert_eq!(c.pixel(40, 50), Some(RED));
        assert_eq!(c.pixel(39, 50), Some(Color::WHITE));
        assert_eq!(c.pixel(0, 0), Some(Color::WHITE));
    }

    // ── encode ────────────────────────────────────────────────────────────

    #[test]
    fn encode_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut c = canvas(6, 4);
        c.set_pixel(2, 1, RED);
        c.encode_to_file(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.get_pixel(2, 1).0, RED.to_rgba_u8());
    }

    #[test]
    fn encode_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.png");
        let err = canvas(2, 2).encode_to_file(&path).unwrap_err();
        assert!(matches!(err, EncodeError::Write { .. }));
    }
}
