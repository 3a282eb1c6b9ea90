//! Generates the placeholder images (icons, splash screen, background, logo and decorative
//! elements) which the app's asset loader expects to find on disk.

pub mod canvas;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod spec;
pub mod utils;

pub use error::{Error, Result, SpecViolation};
pub use generate::{ensure_directories, generate, generate_all, run};
pub use spec::{Codec, Color, ColorMode, ImageSpec, Overlay};
