//! Configuration for the segment grid.

use serde::{Deserialize, Serialize};

use crate::core::Bounds;

/// Cell-size configuration for a [`GridIndex`](crate::GridIndex).
///
/// Cell dimensions are in the same planar units as the indexed geometry.
/// Dimensions larger than the grid extent are clamped at construction so a
/// single cell never exceeds the extent.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cell width (x extent of one cell).
    pub cell_width: f32,

    /// Cell height (y extent of one cell).
    pub cell_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 0.00025,  // ~25m when coordinates are decimal degrees
            cell_height: 0.00025,
        }
    }
}

impl GridConfig {
    /// Cell dimensions that partition `extent` into `cols` x `rows` cells.
    pub fn for_cell_count(extent: &Bounds, cols: usize, rows: usize) -> Self {
        Self {
            cell_width: extent.width() / cols.max(1) as f32,
            cell_height: extent.height() / rows.max(1) as f32,
        }
    }
}
