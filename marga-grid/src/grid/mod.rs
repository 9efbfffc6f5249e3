//! Grid spatial index for line segments.
//!
//! The index rasterises a bounding region into a uniform grid of cells and
//! enters each segment into every cell it traverses:
//!
//! 1. [`clip`] trims the segment to the part inside the grid extent
//! 2. [`crossing`] enumerates where a segment leaves a cell and which
//!    neighbour lies across each crossed side
//! 3. [`index`] walks the clipped segment cell-to-cell, appending the
//!    caller's identifier along the way, and answers rectangular range
//!    queries with the union of identifiers found in the covered cells

pub mod clip;
pub mod config;
pub mod crossing;
pub mod index;

pub use config::GridConfig;
pub use crossing::CellCrossing;
pub use index::GridIndex;
