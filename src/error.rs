//! Error types returned while generating placeholder images

use std::{io, path::PathBuf};

use image::ImageError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a generation run can fail.  None of these are recoverable: the run stops at the first
/// one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating a directory or writing an image file failed
    #[error("filesystem error at '{}'", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An [`ImageSpec`](crate::spec::ImageSpec) can't be turned into an image file
    #[error("invalid image spec for '{}': {reason}", path.display())]
    InvalidSpec { path: PathBuf, reason: SpecViolation },
    /// The codec refused to encode the canvas
    #[error("failed to encode '{}'", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl Error {
    /// Classifies an error returned by `image` while saving to `path`.  Plain I/O failures are
    /// reported as [`Error::Filesystem`].
    pub(crate) fn from_save(path: PathBuf, err: ImageError) -> Self {
        match err {
            ImageError::IoError(source) => Self::Filesystem { path, source },
            source => Self::Encode { path, source },
        }
    }
}

/// The invariant of an [`ImageSpec`](crate::spec::ImageSpec) which was broken
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecViolation {
    #[error("image must be at least 1x1 pixels, got {width}x{height}")]
    ZeroSized { width: u32, height: u32 },
    #[error("unsupported file extension {0:?} (expected png, jpg or jpeg)")]
    UnknownExtension(Option<String>),
    #[error("overlay {rect:?} does not fit inside a {width}x{height} image")]
    OverlayOutOfBounds {
        rect: crate::utils::Rect,
        width: u32,
        height: u32,
    },
    #[error("overlay is {overlay} but the canvas is {canvas}")]
    OverlayModeMismatch {
        canvas: crate::spec::ColorMode,
        overlay: crate::spec::ColorMode,
    },
    #[error("JPEG can't store an alpha channel")]
    AlphaInJpeg,
}
