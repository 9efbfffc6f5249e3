//! The grid index itself.

use std::collections::HashSet;
use std::hash::Hash;

use crate::core::{Bounds, GridCoord, Point2D, Segment2D};
use crate::error::{GridError, Result};

use super::clip::{interior_segment, unlerp};
use super::config::GridConfig;
use super::crossing::{CellCrossing, crossings_into};

/// Uniform grid spatial index for line segments.
///
/// Construction fixes the geometry (outer extent, cell dimensions, grid
/// shape); afterwards the only mutation is appending identifiers via
/// [`add_segment`](GridIndex::add_segment). Queries are pure reads, so a
/// fully built index may be shared across threads.
///
/// The index stores only identifiers, never segment geometry. Cells keep
/// append-only bags: inserting the same key twice duplicates entries, and
/// de-duplication happens in the query's result set.
///
/// # Example
/// ```rust,ignore
/// let extent = Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));
/// let mut index = GridIndex::new(extent, 1.0, 1.0)?;
/// index.add_segment(edge_id, &segment);
/// let nearby = index.query(&location.search_bounds(0.5));
/// ```
#[derive(Clone, Debug)]
pub struct GridIndex<K> {
    // === Grid Geometry ===
    /// Outer extent in planar coordinates.
    extent: Bounds,
    /// Effective cell width (clamped to the extent).
    cell_width: f32,
    /// Effective cell height (clamped to the extent).
    cell_height: f32,
    /// Number of columns (x-axis partitions).
    num_cols: usize,
    /// Number of rows (y-axis partitions).
    num_rows: usize,

    // === Cell Data ===
    /// Per-cell identifier bags, row-major: cell (x, y) at `x + y * num_cols`.
    cells: Vec<Vec<K>>,
    /// Number of segments that landed in at least one cell.
    num_segments: usize,
}

impl<K> GridIndex<K> {
    /// Create an index over `extent` with the requested cell dimensions.
    ///
    /// Cell dimensions are clamped so a single cell never exceeds the
    /// extent; column and row counts round up, so the outermost cells may
    /// reach past the extent.
    ///
    /// # Errors
    /// [`GridError::InvalidExtent`] when the extent has non-positive width
    /// or height, [`GridError::InvalidCellSize`] when a cell dimension is
    /// non-positive. NaN fails both checks.
    pub fn new(extent: Bounds, cell_width: f32, cell_height: f32) -> Result<Self> {
        let width = extent.width();
        let height = extent.height();
        if !(width > 0.0) || !(height > 0.0) {
            return Err(GridError::InvalidExtent { width, height });
        }
        if !(cell_width > 0.0) || !(cell_height > 0.0) {
            return Err(GridError::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }

        let cell_width = cell_width.min(width);
        let cell_height = cell_height.min(height);
        let num_cols = (width / cell_width).ceil() as usize;
        let num_rows = (height / cell_height).ceil() as usize;

        log::debug!(
            "segment grid: {num_cols}x{num_rows} cells of {cell_width} x {cell_height}"
        );

        Ok(Self {
            extent,
            cell_width,
            cell_height,
            num_cols,
            num_rows,
            cells: std::iter::repeat_with(Vec::new)
                .take(num_cols * num_rows)
                .collect(),
            num_segments: 0,
        })
    }

    /// Create an index using a [`GridConfig`] for the cell dimensions.
    pub fn with_config(extent: Bounds, config: &GridConfig) -> Result<Self> {
        Self::new(extent, config.cell_width, config.cell_height)
    }

    /// Outer extent of the grid.
    #[inline]
    pub fn extent(&self) -> &Bounds {
        &self.extent
    }

    /// Effective cell width.
    #[inline]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Effective cell height.
    #[inline]
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Number of columns (x-axis partitions).
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of rows (y-axis partitions).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.num_cols * self.num_rows
    }

    /// Number of segments indexed into at least one cell.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_segments
    }

    /// Whether no segment has been indexed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_segments == 0
    }

    /// Average number of stored identifiers per cell.
    pub fn avg_items_per_cell(&self) -> f32 {
        let total: usize = self.cells.iter().map(Vec::len).sum();
        total as f32 / self.cells.len() as f32
    }

    /// The cell containing a point.
    ///
    /// Floor mapping with **no clamping**: points left of or below the
    /// extent yield negative coordinates, points on or past the far edges
    /// yield past-the-end ones. Callers needing in-range indices clamp
    /// explicitly.
    #[inline]
    pub fn grid_coordinates(&self, point: Point2D) -> GridCoord {
        GridCoord::new(
            ((point.x - self.extent.min.x) / self.cell_width).floor() as i32,
            ((point.y - self.extent.min.y) / self.cell_height).floor() as i32,
        )
    }

    /// The rectangle covered by a cell.
    ///
    /// Defined for any coordinate, including out-of-range ones; the cell
    /// walk evaluates neighbours one step outside the grid.
    #[inline]
    pub fn cell_bounds(&self, coord: GridCoord) -> Bounds {
        let min = Point2D::new(
            self.extent.min.x + coord.x as f32 * self.cell_width,
            self.extent.min.y + coord.y as f32 * self.cell_height,
        );
        Bounds::new(min, Point2D::new(min.x + self.cell_width, min.y + self.cell_height))
    }

    /// The centre point of a cell. Defined for any coordinate, like
    /// [`cell_bounds`](GridIndex::cell_bounds).
    #[inline]
    pub fn cell_center(&self, coord: GridCoord) -> Point2D {
        self.cell_bounds(coord).center()
    }

    /// The identifiers stored in a cell, or `None` when the coordinate is
    /// out of range.
    #[inline]
    pub fn items_in_cell(&self, coord: GridCoord) -> Option<&[K]> {
        self.coord_to_index(coord).map(|i| self.cells[i].as_slice())
    }

    /// Flat table index for an in-range coordinate.
    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.num_cols
            && (coord.y as usize) < self.num_rows
        {
            Some(coord.y as usize * self.num_cols + coord.x as usize)
        } else {
            None
        }
    }

    /// The nearest in-range coordinate.
    #[inline]
    fn clamp_coord(&self, coord: GridCoord) -> GridCoord {
        GridCoord::new(
            coord.x.clamp(0, self.num_cols as i32 - 1),
            coord.y.clamp(0, self.num_rows as i32 - 1),
        )
    }
}

impl<K: Copy> GridIndex<K> {
    /// Index a segment: append `key` to every cell the segment's interior
    /// clip passes through.
    ///
    /// Segments entirely outside the extent are skipped. Never fails, and
    /// never de-duplicates: inserting the same key twice doubles its
    /// entries (queries still report it once).
    pub fn add_segment(&mut self, key: K, segment: &Segment2D) {
        let Some(interior) = interior_segment(&self.extent, segment) else {
            log::trace!("segment outside grid extent, skipped");
            return;
        };
        self.num_segments += 1;

        let start = interior.start;
        let end = interior.end;
        // Clip endpoints can sit exactly on the far extent edges, where the
        // floor mapping lands one past the last cell.
        let mut coord = self.clamp_coord(self.grid_coordinates(start));

        if interior.is_degenerate() {
            if let Some(index) = self.coord_to_index(coord) {
                self.cells[index].push(key);
            }
            return;
        }

        let mut current = start;
        let mut boundary: Vec<CellCrossing> = Vec::with_capacity(4);

        // Walk cell-to-cell along the clipped segment. Each step must
        // strictly reduce the squared distance from the neighbouring cell's
        // centre to the segment end; ties keep the walk in place. That
        // monotone-progress rule is what terminates the walk when float
        // error at corners produces near-duplicate crossings.
        while unlerp(start, end, current) < 1.0 {
            let Some(index) = self.coord_to_index(coord) else {
                break;
            };
            self.cells[index].push(key);

            crossings_into(
                &self.cell_bounds(coord),
                &Segment2D::new(current, end),
                &mut boundary,
            );

            let mut best_distance = end.distance_squared(self.cell_center(coord));
            let mut best: Option<(Point2D, GridCoord)> = None;
            for crossing in &boundary {
                let neighbor = crossing.neighbor_of(coord);
                // A step off the grid is never wanted: the clip keeps the
                // walk interior, up to float error at the boundary.
                if self.coord_to_index(neighbor).is_none() {
                    continue;
                }
                let distance = end.distance_squared(self.cell_center(neighbor));
                if distance < best_distance {
                    best_distance = distance;
                    best = Some((crossing.point, neighbor));
                }
            }

            match best {
                Some((point, neighbor)) => {
                    current = point;
                    coord = neighbor;
                }
                None => break,
            }
        }
    }
}

impl<K: Copy + Eq + Hash> GridIndex<K> {
    /// All identifiers recorded in cells overlapping `range`.
    ///
    /// The corner coordinates are clamped into index range, so a rectangle
    /// partly or wholly outside the extent is still answered (the latter
    /// from the nearest boundary cells). The result is a de-duplicated
    /// superset of the segments actually intersecting `range`; callers
    /// refine geometrically when they need exact hits.
    pub fn query(&self, range: &Bounds) -> HashSet<K> {
        let lo = self.clamp_coord(self.grid_coordinates(range.min));
        let hi = self.clamp_coord(self.grid_coordinates(range.max));

        let mut results = HashSet::new();
        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                if let Some(index) = self.coord_to_index(GridCoord::new(x, y)) {
                    results.extend(self.cells[index].iter().copied());
                }
            }
        }
        results
    }
}
