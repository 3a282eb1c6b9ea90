//! The fixed set of placeholder assets expected by the app's asset loader.  Adding a placeholder
//! only means adding an entry here.

use crate::{
    spec::{Color, ImageSpec},
    utils::Rect,
};

/// Directories which must exist before anything is written.  `src/assets/fonts` is never written
/// to by us; the font files are supplied separately.
pub const REQUIRED_DIRECTORIES: &[&str] = &["assets", "src/assets", "src/assets/fonts"];

pub const BRAND_PURPLE: Color = Color::Rgb([156, 0, 226]);
pub const CREAM: Color = Color::Rgb([242, 226, 222]);
pub const TRANSPARENT_WHITE: Color = Color::Rgba([255, 255, 255, 0]);
pub const OPAQUE_WHITE: Color = Color::Rgba([255, 255, 255, 255]);
pub const TRANSLUCENT_WHITE: Color = Color::Rgba([255, 255, 255, 50]);

/// Every placeholder image, in the order they're generated
pub fn placeholders() -> Vec<ImageSpec> {
    vec![
        // App icons
        ImageSpec::new("assets/icon.png", 512, 512, BRAND_PURPLE),
        ImageSpec::new("assets/splash.png", 1284, 2778, BRAND_PURPLE),
        ImageSpec::new("assets/adaptive-icon.png", 512, 512, BRAND_PURPLE),
        ImageSpec::new("assets/favicon.png", 48, 48, BRAND_PURPLE),
        ImageSpec::new("src/assets/background.jpg", 375, 812, CREAM),
        ImageSpec::new("src/assets/logo.png", 147, 40, TRANSPARENT_WHITE)
            .with_overlay(logo_rect(), OPAQUE_WHITE),
        // Decorative elements
        ImageSpec::new("src/assets/elementos-03.png", 170, 170, TRANSLUCENT_WHITE),
        ImageSpec::new("src/assets/elementos-04.png", 202, 202, TRANSLUCENT_WHITE),
    ]
}

fn logo_rect() -> Rect {
    Rect::new(0, 0, 146, 39).expect("logo rect corners are ordered")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_placeholder_is_valid() {
        for spec in placeholders() {
            spec.validate().unwrap();
        }
    }

    #[test]
    fn paths_are_distinct() {
        let specs = placeholders();
        let paths: HashSet<_> = specs.iter().map(|s| &s.path).collect();
        assert_eq!(paths.len(), specs.len());
        assert_eq!(specs.len(), 8);
    }

    #[test]
    fn every_parent_is_a_required_directory() {
        for spec in placeholders() {
            let parent = spec.path.parent().unwrap();
            assert!(
                REQUIRED_DIRECTORIES.iter().any(|d| parent.as_os_str() == *d),
                "{} has no required parent",
                spec.path.display()
            );
        }
    }

    #[test]
    fn only_logo_has_an_overlay() {
        let with_overlay: Vec<_> = placeholders()
            .into_iter()
            .filter(|s| s.overlay.is_some())
            .map(|s| s.path)
            .collect();
        assert_eq!(with_overlay, vec![std::path::PathBuf::from("src/assets/logo.png")]);
    }
}
