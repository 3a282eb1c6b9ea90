//! In-memory pixel buffers, before they're encoded to disk

use std::{
    fmt::{Debug, Formatter},
    path::Path,
};

use cgmath::Vector2;
use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::{
    spec::{Codec, Color, ColorMode},
    utils::Rect,
};

/// A pixel buffer in either [`ColorMode`], wrapping the corresponding `image` buffer with a
/// human-friendly [`Debug`] impl.
#[derive(Clone, PartialEq)]
pub enum Canvas {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Canvas {
    /// Creates a canvas where every pixel is `fill`.  The [`ColorMode`] is taken from `fill`.
    pub fn new(size: Vector2<u32>, fill: Color) -> Self {
        match fill {
            Color::Rgb(c) => Self::Rgb(RgbImage::from_pixel(size.x, size.y, Rgb(c))),
            Color::Rgba(c) => Self::Rgba(RgbaImage::from_pixel(size.x, size.y, Rgba(c))),
        }
    }

    pub fn mode(&self) -> ColorMode {
        match self {
            Self::Rgb(_) => ColorMode::Rgb,
            Self::Rgba(_) => ColorMode::Rgba,
        }
    }

    pub fn size(&self) -> Vector2<u32> {
        let (w, h) = match self {
            Self::Rgb(i) => i.dimensions(),
            Self::Rgba(i) => i.dimensions(),
        };
        Vector2::new(w, h)
    }

    /// Sets every pixel inside `rect` to `color`, leaving the rest of the canvas untouched.
    ///
    /// # Panics
    ///
    /// Panics if `rect` leaves the canvas or `color` has a different [`ColorMode`] to `self`.
    /// [`ImageSpec::validate`](crate::spec::ImageSpec::validate) rules out both.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        assert!(rect.fits_within(self.size()));
        match (self, color) {
            (Self::Rgb(img), Color::Rgb(c)) => {
                rect.pixels().for_each(|(x, y)| img.put_pixel(x, y, Rgb(c)))
            }
            (Self::Rgba(img), Color::Rgba(c)) => {
                rect.pixels().for_each(|(x, y)| img.put_pixel(x, y, Rgba(c)))
            }
            (canvas, color) => panic!(
                "can't draw a {} colour onto a {} canvas",
                color.mode(),
                canvas.mode()
            ),
        }
    }

    /// Gets the pixel at `(x, y)` as a [`Color`] of this canvas' [`ColorMode`]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        match self {
            Self::Rgb(img) => Color::Rgb(img.get_pixel(x, y).0),
            Self::Rgba(img) => Color::Rgba(img.get_pixel(x, y).0),
        }
    }

    /// The raw channel bytes, row by row
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Rgb(img) => img.as_raw(),
            Self::Rgba(img) => img.as_raw(),
        }
    }

    /// Encodes the canvas with `codec` and writes it to `path`, replacing any existing file
    pub fn save(&self, path: &Path, codec: Codec) -> image::ImageResult<()> {
        let format = codec.image_format();
        match self {
            Self::Rgb(img) => img.save_with_format(path, format),
            Self::Rgba(img) => img.save_with_format(path, format),
        }
    }
}

impl Debug for Canvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        write!(f, "Canvas({} {}x{})", self.mode(), size.x, size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_filled() {
        let canvas = Canvas::new(Vector2::new(3, 2), Color::Rgba([255, 255, 255, 50]));
        assert_eq!(canvas.mode(), ColorMode::Rgba);
        assert_eq!(canvas.size(), Vector2::new(3, 2));
        assert_eq!(canvas.as_bytes().len(), 3 * 2 * 4);
        assert!(canvas
            .as_bytes()
            .chunks(4)
            .all(|px| px == [255, 255, 255, 50]));
    }

    #[test]
    fn fill_rect_only_touches_inside() {
        let base = Color::Rgb([242, 226, 222]);
        let red = Color::Rgb([255, 0, 0]);
        let mut canvas = Canvas::new(Vector2::new(5, 4), base);
        let rect = Rect::new(1, 1, 3, 2).unwrap();
        canvas.fill_rect(rect, red);
        for y in 0..4 {
            for x in 0..5 {
                let expected = if rect.contains(x, y) { red } else { base };
                assert_eq!(canvas.pixel(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn overlay_replaces_alpha() {
        let mut canvas = Canvas::new(Vector2::new(147, 40), Color::Rgba([255, 255, 255, 0]));
        canvas.fill_rect(Rect::new(0, 0, 146, 39).unwrap(), Color::Rgba([255; 4]));
        assert!(canvas.as_bytes().chunks(4).all(|px| px == [255; 4]));
    }

    #[test]
    #[should_panic]
    fn mismatched_mode_panics() {
        let mut canvas = Canvas::new(Vector2::new(2, 2), Color::Rgb([0; 3]));
        canvas.fill_rect(Rect::new(0, 0, 0, 0).unwrap(), Color::Rgba([0; 4]));
    }

    #[test]
    fn debug_is_compact() {
        let canvas = Canvas::new(Vector2::new(147, 40), Color::Rgba([0; 4]));
        assert_eq!(format!("{:?}", canvas), "Canvas(RGBA 147x40)");
    }
}
