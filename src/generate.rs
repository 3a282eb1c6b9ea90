//! Turning [`ImageSpec`]s into image files

use std::path::{Path, PathBuf};

use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    canvas::Canvas,
    manifest::{self, REQUIRED_DIRECTORIES},
    spec::ImageSpec,
    Error, Result,
};

/// Creates `root/dir` (along with any missing ancestors) for every `dir` in `dirs`.  Directories
/// which already exist are left alone.
pub fn ensure_directories<P: AsRef<Path>>(root: &Path, dirs: &[P]) -> Result<()> {
    for dir in dirs {
        let path = root.join(dir);
        log::debug!("Ensuring directory {}", path.display());
        std::fs::create_dir_all(&path).map_err(|source| Error::Filesystem { path, source })?;
    }
    Ok(())
}

/// Renders `spec` and writes it to `root.join(&spec.path)`, returning the path written.  Nothing
/// is written if `spec` is invalid.
pub fn generate(root: &Path, spec: &ImageSpec) -> Result<PathBuf> {
    let codec = spec.validate()?;

    let mut canvas = Canvas::new(spec.size, spec.fill);
    log::debug!("Allocated {:?} for {}", canvas, spec.path.display());
    if let Some(overlay) = &spec.overlay {
        canvas.fill_rect(overlay.rect, overlay.color);
    }

    let path = root.join(&spec.path);
    canvas
        .save(&path, codec)
        .map_err(|e| Error::from_save(path.clone(), e))?;
    log::info!(
        "Wrote {} ({}x{} {}, {:?})",
        path.display(),
        spec.size.x,
        spec.size.y,
        spec.mode(),
        codec
    );
    Ok(path)
}

/// Generates every spec in `specs` in parallel.  Each spec owns its canvas and writes a distinct
/// file, so they need no coordination.  Once any spec fails, no further specs are started and
/// that error is returned; files which were already written are kept.
pub fn generate_all(root: &Path, specs: &[ImageSpec]) -> Result<Vec<PathBuf>> {
    specs.par_iter().map(|spec| generate(root, spec)).collect()
}

/// Creates the [`REQUIRED_DIRECTORIES`] under `root` and then writes every
/// [`placeholders`](manifest::placeholders) image into it.
pub fn run(root: &Path) -> Result<Vec<PathBuf>> {
    ensure_directories(root, REQUIRED_DIRECTORIES)?;
    let specs = manifest::placeholders();
    log::debug!(
        "Generating {}",
        specs.iter().map(|s| s.path.display()).join(", ")
    );
    generate_all(root, &specs)
}
