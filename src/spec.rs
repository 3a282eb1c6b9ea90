//! Descriptions of the image files to generate.

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use cgmath::Vector2;
use image::ImageFormat;

use crate::{error::SpecViolation, utils::Rect, Error, Result};

/// The channel layout of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Rgb,
    /// RGB plus an alpha (transparency) channel
    Rgba,
}

impl ColorMode {
    pub fn channel_count(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        })
    }
}

/// A colour, tagged with the [`ColorMode`] whose channels it fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl Color {
    pub fn mode(self) -> ColorMode {
        match self {
            Self::Rgb(_) => ColorMode::Rgb,
            Self::Rgba(_) => ColorMode::Rgba,
        }
    }

    pub fn channels(&self) -> &[u8] {
        match self {
            Self::Rgb(c) => c,
            Self::Rgba(c) => c,
        }
    }
}

/// The file format an image is written in, chosen by the extension of its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Png,
    Jpeg,
}

impl Codec {
    /// Picks the codec for `path` (`.png`, `.jpg` or `.jpeg`, ignoring case)
    pub fn from_path(path: &Path) -> Result<Self, SpecViolation> {
        let ext = path.extension().and_then(|e| e.to_str());
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg),
            _ => Err(SpecViolation::UnknownExtension(ext.map(str::to_owned))),
        }
    }

    pub fn supports(self, mode: ColorMode) -> bool {
        !(self == Self::Jpeg && mode == ColorMode::Rgba)
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// A rectangle painted over the base fill of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub rect: Rect,
    pub color: Color,
}

/// The specification of one output image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    /// Destination, relative to the output root.  The extension determines the [`Codec`].
    pub path: PathBuf,
    pub size: Vector2<u32>,
    /// The colour of every pixel before the overlay is drawn.  Also decides the [`ColorMode`].
    pub fill: Color,
    pub overlay: Option<Overlay>,
}

impl ImageSpec {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32, fill: Color) -> Self {
        Self {
            path: path.into(),
            size: Vector2::new(width, height),
            fill,
            overlay: None,
        }
    }

    /// Adds an [`Overlay`] covering `rect`, replacing any previous one
    pub fn with_overlay(mut self, rect: Rect, color: Color) -> Self {
        self.overlay = Some(Overlay { rect, color });
        self
    }

    pub fn mode(&self) -> ColorMode {
        self.fill.mode()
    }

    /// Checks every invariant of `self`, returning the [`Codec`] it should be written with.
    pub fn validate(&self) -> Result<Codec> {
        self.check().map_err(|reason| Error::InvalidSpec {
            path: self.path.clone(),
            reason,
        })
    }

    fn check(&self) -> Result<Codec, SpecViolation> {
        let (width, height) = (self.size.x, self.size.y);
        if width == 0 || height == 0 {
            return Err(SpecViolation::ZeroSized { width, height });
        }
        let codec = Codec::from_path(&self.path)?;
        if let Some(overlay) = &self.overlay {
            if !overlay.rect.fits_within(self.size) {
                return Err(SpecViolation::OverlayOutOfBounds {
                    rect: overlay.rect,
                    width,
                    height,
                });
            }
            if overlay.color.mode() != self.mode() {
                return Err(SpecViolation::OverlayModeMismatch {
                    canvas: self.mode(),
                    overlay: overlay.color.mode(),
                });
            }
        }
        if !codec.supports(self.mode()) {
            return Err(SpecViolation::AlphaInJpeg);
        }
        Ok(codec)
    }
}
