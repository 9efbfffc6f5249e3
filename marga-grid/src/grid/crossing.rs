//! Box-boundary crossings.
//!
//! The cell walk needs to know not just *where* a segment meets a cell
//! boundary but *which neighbouring cell* lies across the crossed side.
//! Each crossing therefore carries a unit step `(dx, dy)`; grid traversal
//! steps by that vector instead of re-deriving the direction from geometry.

use crate::core::{Bounds, GridCoord, Point2D, Segment2D};

/// One intersection between a segment and a side of a bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellCrossing {
    /// The intersection point on the box boundary.
    pub point: Point2D,
    /// Column step to the cell adjacent to the crossed side.
    pub dx: i32,
    /// Row step to the cell adjacent to the crossed side.
    pub dy: i32,
}

impl CellCrossing {
    /// The cell reached from `coord` by stepping across the crossed side.
    #[inline]
    pub fn neighbor_of(&self, coord: GridCoord) -> GridCoord {
        coord.offset(self.dx, self.dy)
    }
}

/// All crossings between a segment and the sides of a box.
///
/// Sides are tested in a fixed order: bottom `(0,-1)`, right `(+1,0)`,
/// top `(0,+1)`, left `(-1,0)`. A segment passing exactly through a corner
/// produces one crossing per touched side.
pub fn crossings(bounds: &Bounds, segment: &Segment2D) -> Vec<CellCrossing> {
    let mut result = Vec::new();
    crossings_into(bounds, segment, &mut result);
    result
}

/// Buffer-reusing variant of [`crossings`] for hot loops.
///
/// The buffer is cleared before crossings are appended.
pub fn crossings_into(bounds: &Bounds, segment: &Segment2D, out: &mut Vec<CellCrossing>) {
    out.clear();

    let bottom_left = bounds.min;
    let bottom_right = Point2D::new(bounds.max.x, bounds.min.y);
    let top_right = bounds.max;
    let top_left = Point2D::new(bounds.min.x, bounds.max.y);

    let sides = [
        (Segment2D::new(bottom_left, bottom_right), 0, -1),
        (Segment2D::new(bottom_right, top_right), 1, 0),
        (Segment2D::new(top_right, top_left), 0, 1),
        (Segment2D::new(top_left, bottom_left), -1, 0),
    ];

    for (side, dx, dy) in sides {
        if let Some(point) = segment.intersection(&side) {
            out.push(CellCrossing { point, dx, dy });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Bounds {
        Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0))
    }

    #[test]
    fn test_vertical_pass_through() {
        let segment = Segment2D::new(Point2D::new(0.5, -1.0), Point2D::new(0.5, 2.0));
        let hits = crossings(&unit_box(), &segment);

        // Bottom before top, per the fixed side order.
        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].dx, hits[0].dy), (0, -1));
        assert_eq!(hits[0].point, Point2D::new(0.5, 0.0));
        assert_eq!((hits[1].dx, hits[1].dy), (0, 1));
        assert_eq!(hits[1].point, Point2D::new(0.5, 1.0));
    }

    #[test]
    fn test_horizontal_pass_through() {
        let segment = Segment2D::new(Point2D::new(-1.0, 0.5), Point2D::new(2.0, 0.5));
        let hits = crossings(&unit_box(), &segment);

        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].dx, hits[0].dy), (1, 0));
        assert_eq!((hits[1].dx, hits[1].dy), (-1, 0));
    }

    #[test]
    fn test_corner_touch_reports_both_sides() {
        let segment = Segment2D::new(Point2D::new(0.5, 0.5), Point2D::new(1.5, 1.5));
        let hits = crossings(&unit_box(), &segment);

        // The exit through (1, 1) lies on the right and the top side.
        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].dx, hits[0].dy), (1, 0));
        assert_eq!((hits[1].dx, hits[1].dy), (0, 1));
        assert_eq!(hits[0].point, Point2D::new(1.0, 1.0));
        assert_eq!(hits[1].point, Point2D::new(1.0, 1.0));
    }

    #[test]
    fn test_miss() {
        let segment = Segment2D::new(Point2D::new(2.0, 2.0), Point2D::new(3.0, 3.0));
        assert!(crossings(&unit_box(), &segment).is_empty());
    }

    #[test]
    fn test_interior_segment_no_crossings() {
        let segment = Segment2D::new(Point2D::new(0.2, 0.2), Point2D::new(0.8, 0.8));
        assert!(crossings(&unit_box(), &segment).is_empty());
    }

    #[test]
    fn test_neighbor_of() {
        let crossing = CellCrossing {
            point: Point2D::ZERO,
            dx: 1,
            dy: 0,
        };
        assert_eq!(crossing.neighbor_of(GridCoord::new(3, 7)), GridCoord::new(4, 7));
    }

    #[test]
    fn test_buffer_reuse_clears() {
        let mut buffer = Vec::new();
        let through = Segment2D::new(Point2D::new(0.5, -1.0), Point2D::new(0.5, 2.0));
        crossings_into(&unit_box(), &through, &mut buffer);
        assert_eq!(buffer.len(), 2);

        let miss = Segment2D::new(Point2D::new(5.0, 5.0), Point2D::new(6.0, 6.0));
        crossings_into(&unit_box(), &miss, &mut buffer);
        assert!(buffer.is_empty());
    }
}
