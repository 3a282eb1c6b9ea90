use std::fmt::{Debug, Formatter};

use cgmath::{Point2, Vector2};
use itertools::Itertools;

//////////
// RECT //
//////////

/// An axis-aligned rectangular region of pixels.  Both corners are _inclusive_, so
/// `Rect::new(0, 0, 0, 0)` covers exactly one pixel.
// Invariant: max.x >= min.x && max.y >= min.y
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    min: Point2<u32>,
    max: Point2<u32>,
}

impl Rect {
    /// Creates a [`Rect`] from its corners, or `None` if `(x0, y0)` isn't the minimum corner.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Option<Self> {
        (x0 <= x1 && y0 <= y1).then(|| Self {
            min: Point2::new(x0, y0),
            max: Point2::new(x1, y1),
        })
    }

    /// Creates the [`Rect`] covering every pixel of an image of the given (non-zero) size
    pub fn from_size(size: Vector2<u32>) -> Option<Self> {
        Self::new(0, 0, size.x.checked_sub(1)?, size.y.checked_sub(1)?)
    }

    pub fn min(self) -> Point2<u32> {
        self.min
    }

    pub fn max(self) -> Point2<u32> {
        self.max
    }

    pub fn width(self) -> u32 {
        self.max.x - self.min.x + 1
    }

    pub fn height(self) -> u32 {
        self.max.y - self.min.y + 1
    }

    pub fn contains(self, x: u32, y: u32) -> bool {
        (self.min.x..=self.max.x).contains(&x) && (self.min.y..=self.max.y).contains(&y)
    }

    /// Returns `true` if every pixel of `self` lies inside `[0, size.x) × [0, size.y)`
    pub fn fits_within(self, size: Vector2<u32>) -> bool {
        self.max.x < size.x && self.max.y < size.y
    }

    /// Iterates over every pixel coordinate covered by `self`, row by row
    pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (self.min.y..=self.max.y)
            .cartesian_product(self.min.x..=self.max.x)
            .map(|(y, x)| (x, y))
    }
}

impl Debug for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(({}, {}) - ({}, {}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_corners_are_rejected() {
        assert!(Rect::new(5, 0, 4, 10).is_none());
        assert!(Rect::new(0, 5, 10, 4).is_none());
        assert!(Rect::new(3, 3, 3, 3).is_some());
    }

    #[test]
    fn bounds_are_inclusive() {
        let r = Rect::new(0, 0, 146, 39).unwrap();
        assert_eq!((r.width(), r.height()), (147, 40));
        assert!(r.contains(0, 0));
        assert!(r.contains(146, 39));
        assert!(!r.contains(147, 39));
        assert!(!r.contains(146, 40));
    }

    #[test]
    fn fits_within_checks_the_far_corner() {
        let r = Rect::new(0, 0, 146, 39).unwrap();
        assert!(r.fits_within(Vector2::new(147, 40)));
        assert!(!r.fits_within(Vector2::new(146, 40)));
        assert!(!r.fits_within(Vector2::new(147, 39)));
    }

    #[test]
    fn from_size_covers_whole_image() {
        let r = Rect::from_size(Vector2::new(48, 20)).unwrap();
        assert_eq!(r.min(), Point2::new(0, 0));
        assert_eq!(r.max(), Point2::new(47, 19));
        assert!(Rect::from_size(Vector2::new(0, 20)).is_none());
    }

    #[test]
    fn pixels_visits_each_coordinate_once() {
        let r = Rect::new(2, 1, 4, 2).unwrap();
        let pixels = r.pixels().collect_vec();
        assert_eq!(
            pixels,
            vec![(2, 1), (3, 1), (4, 1), (2, 2), (3, 2), (4, 2)]
        );
    }

    #[test]
    fn debug_shows_both_corners() {
        let r = Rect::new(1, 2, 3, 4).unwrap();
        assert_eq!(format!("{:?}", r), "Rect((1, 2) - (3, 4))");
    }
}
