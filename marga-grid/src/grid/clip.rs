//! Clipping of segments to the grid extent.

use crate::core::{Bounds, Point2D, Segment2D};

use super::crossing::crossings;

/// Inverse interpolation: the scalar `t` such that `p ≈ a + t * (b - a)`,
/// for `p` on (or near) the line through `a` and `b`.
///
/// Divides along the axis with the larger absolute delta. Picking the
/// smaller axis produces large errors for near-axis-aligned segments, and
/// the cell walk's termination test runs on this value.
///
/// `a` and `b` must be distinct.
pub fn unlerp(a: Point2D, b: Point2D, p: Point2D) -> f32 {
    if (b.x - a.x).abs() > (b.y - a.y).abs() {
        (p.x - a.x) / (b.x - a.x)
    } else {
        (p.y - a.y) / (b.y - a.y)
    }
}

/// The portion of `segment` inside `extent`, or `None` when the segment
/// lies entirely outside.
///
/// Candidate endpoints are the crossings of the segment with the extent
/// boundary plus whichever of its endpoints the extent contains; the
/// interior runs from the candidate with minimal `t` to the one with
/// maximal `t`. A non-empty interior exists iff `min_t < 1 && max_t > 0`.
/// A segment grazing the boundary at a single mid-segment point clips to
/// a degenerate segment at that point.
pub fn interior_segment(extent: &Bounds, segment: &Segment2D) -> Option<Segment2D> {
    if segment.is_degenerate() {
        return extent.contains(segment.start).then_some(*segment);
    }

    let mut min_t = 1.0_f32;
    let mut max_t = 0.0_f32;
    let mut min_point = Point2D::ZERO;
    let mut max_point = Point2D::ZERO;

    let mut consider = |p: Point2D| {
        let t = unlerp(segment.start, segment.end, p);
        if t < min_t {
            min_t = t;
            min_point = p;
        }
        if t > max_t {
            max_t = t;
            max_point = p;
        }
    };

    for crossing in crossings(extent, segment) {
        consider(crossing.point);
    }
    if extent.contains(segment.start) {
        consider(segment.start);
    }
    if extent.contains(segment.end) {
        consider(segment.end);
    }

    (min_t < 1.0 && max_t > 0.0).then(|| Segment2D::new(min_point, max_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn extent() -> Bounds {
        Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0))
    }

    #[test]
    fn test_unlerp_x_dominant() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(10.0, 1.0);
        assert_relative_eq!(unlerp(a, b, Point2D::new(5.0, 0.5)), 0.5, epsilon = 1e-6);
        assert_relative_eq!(unlerp(a, b, b), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unlerp_y_dominant() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 10.0);
        assert_relative_eq!(unlerp(a, b, Point2D::new(0.25, 2.5)), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_unlerp_axis_aligned() {
        // Horizontal: the y delta is zero, so the x axis must be chosen.
        let a = Point2D::new(2.0, 5.0);
        let b = Point2D::new(12.0, 5.0);
        assert_relative_eq!(unlerp(a, b, Point2D::new(7.0, 5.0)), 0.5, epsilon = 1e-6);

        // Vertical
        let a = Point2D::new(5.0, 2.0);
        let b = Point2D::new(5.0, 12.0);
        assert_relative_eq!(unlerp(a, b, Point2D::new(5.0, 4.5)), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_fully_inside() {
        let segment = Segment2D::new(Point2D::new(1.0, 1.0), Point2D::new(9.0, 2.0));
        let interior = interior_segment(&extent(), &segment).unwrap();
        assert_eq!(interior, segment);
    }

    #[test]
    fn test_clip_is_idempotent() {
        let segment = Segment2D::new(Point2D::new(-5.0, 5.0), Point2D::new(5.0, 5.0));
        let once = interior_segment(&extent(), &segment).unwrap();
        let twice = interior_segment(&extent(), &once).unwrap();

        assert_eq!(once, Segment2D::new(Point2D::new(0.0, 5.0), Point2D::new(5.0, 5.0)));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_through_two_sides() {
        let segment = Segment2D::new(Point2D::new(-5.0, 5.0), Point2D::new(15.0, 5.0));
        let interior = interior_segment(&extent(), &segment).unwrap();

        assert_eq!(interior.start, Point2D::new(0.0, 5.0));
        assert_eq!(interior.end, Point2D::new(10.0, 5.0));
    }

    #[test]
    fn test_entering_and_leaving_different_sides() {
        // In through the left side, out through the bottom.
        let segment = Segment2D::new(Point2D::new(-2.0, 4.0), Point2D::new(6.0, -4.0));
        let interior = interior_segment(&extent(), &segment).unwrap();

        assert_relative_eq!(interior.start.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(interior.start.y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(interior.end.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(interior.end.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_one_endpoint_inside() {
        let segment = Segment2D::new(Point2D::new(5.0, 5.0), Point2D::new(5.0, 15.0));
        let interior = interior_segment(&extent(), &segment).unwrap();

        assert_eq!(interior.start, Point2D::new(5.0, 5.0));
        assert_eq!(interior.end, Point2D::new(5.0, 10.0));
    }

    #[test]
    fn test_entirely_outside() {
        let segment = Segment2D::new(Point2D::new(-5.0, -5.0), Point2D::new(-1.0, -1.0));
        assert!(interior_segment(&extent(), &segment).is_none());
    }

    #[test]
    fn test_touching_start_only_is_discarded() {
        // Only the start endpoint grazes the boundary: max_t stays 0.
        let segment = Segment2D::new(Point2D::new(0.0, 5.0), Point2D::new(-10.0, 5.0));
        assert!(interior_segment(&extent(), &segment).is_none());
    }

    #[test]
    fn test_degenerate_inside_and_outside() {
        let p = Point2D::new(3.5, 3.5);
        let inside = Segment2D::new(p, p);
        assert_eq!(interior_segment(&extent(), &inside), Some(inside));

        let q = Point2D::new(-3.5, 3.5);
        let outside = Segment2D::new(q, q);
        assert!(interior_segment(&extent(), &outside).is_none());
    }
}
