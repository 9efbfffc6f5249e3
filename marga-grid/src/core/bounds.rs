//! Axis-aligned bounding box.
//!
//! [`Bounds`] represents a rectangular region in planar coordinates. The
//! grid uses it for its outer extent, for per-cell rectangles, and as the
//! shape of a range query.

use super::point::Point2D;

/// Axis-aligned bounding box.
///
/// The invariant `min.x <= max.x && min.y <= max.y` is the caller's
/// responsibility; a box with `min == max` is a legal zero-area box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Create a zero-area box at a single point.
    #[inline]
    pub fn from_point(point: Point2D) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check if a point is inside the box (boundary included).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if this box overlaps another (shared boundary counts).
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// The box grown by a margin on all sides.
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let bounds = Bounds::new(Point2D::new(1.0, 2.0), Point2D::new(5.0, 8.0));

        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.center(), Point2D::new(3.0, 5.0));
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));

        assert!(bounds.contains(Point2D::new(5.0, 5.0)));
        assert!(bounds.contains(Point2D::new(0.0, 0.0))); // Boundary
        assert!(bounds.contains(Point2D::new(10.0, 10.0))); // Boundary
        assert!(!bounds.contains(Point2D::new(-0.1, 5.0)));
        assert!(!bounds.contains(Point2D::new(5.0, 10.1)));
    }

    #[test]
    fn test_intersects() {
        let a = Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));
        let b = Bounds::new(Point2D::new(5.0, 5.0), Point2D::new(15.0, 15.0));
        let c = Bounds::new(Point2D::new(20.0, 20.0), Point2D::new(30.0, 30.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_from_point_expand() {
        let bounds = Bounds::from_point(Point2D::new(5.0, 10.0));
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);

        let grown = bounds.expand(2.0);
        assert_eq!(grown.min, Point2D::new(3.0, 8.0));
        assert_eq!(grown.max, Point2D::new(7.0, 12.0));
        assert_eq!(grown.center(), Point2D::new(5.0, 10.0));
    }
}
