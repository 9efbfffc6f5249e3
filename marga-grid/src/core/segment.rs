//! Line segment type using endpoint representation.

use super::point::Point2D;

/// A 2D line segment defined by its endpoints.
///
/// A degenerate segment with `start == end` is legal; the grid treats it
/// as a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2D {
    /// Start point of the segment.
    pub start: Point2D,
    /// End point of the segment.
    pub end: Point2D,
}

impl Segment2D {
    /// Create a new segment from two points.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Squared length of the segment (avoids sqrt).
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.start.distance_squared(self.end)
    }

    /// Whether both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Get a point along the segment at parameter t.
    ///
    /// - `t = 0`: returns the start point
    /// - `t = 1`: returns the end point
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        Point2D::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        )
    }

    /// Find the intersection point with another segment.
    ///
    /// Solves the parametric form with cross products; parameters are
    /// accepted on the closed interval `[0, 1]`, so endpoint touches and
    /// corner hits count. Parallel segments (collinear overlap included)
    /// yield no intersection point.
    pub fn intersection(&self, other: &Segment2D) -> Option<Point2D> {
        let d1 = self.direction();
        let d2 = other.direction();

        let cross = d1.cross(d2);
        if cross.abs() < f32::EPSILON {
            // Parallel segments
            return None;
        }

        let origin_diff = other.start - self.start;
        let t = origin_diff.cross(d2) / cross;
        let s = origin_diff.cross(d1) / cross;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s) {
            Some(self.point_at(t))
        } else {
            None
        }
    }
}
