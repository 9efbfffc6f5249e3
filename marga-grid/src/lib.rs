//! # Marga-Grid: Segment Grid Index for Map Matching
//!
//! A uniform grid spatial index for road-network line segments, answering
//! "which edges lie near this region?" queries for a map-matching / routing
//! engine.
//!
//! ## Features
//!
//! - **Exact Cell Rasterisation**: Each segment is entered into every cell it
//!   actually traverses, walked cell-to-cell through boundary intersections
//!   rather than approximated by its bounding box
//! - **Robust Termination**: The cell walk advances only when a step strictly
//!   reduces the distance to the segment end, so floating-point noise at cell
//!   corners cannot loop it
//! - **Opaque Keys**: The index stores caller-chosen identifiers (typically
//!   graph edge ids) and no geometry, keeping memory proportional to cell
//!   occupancy
//! - **Superset Queries**: Range queries return the union of identifiers from
//!   all overlapping cells; callers refine geometrically when they need exact
//!   hits
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_grid::{Bounds, GridIndex, Point2D, Segment2D};
//!
//! // One-degree tile, cells of 0.1 x 0.1 degrees.
//! let extent = Bounds::new(Point2D::new(8.0, 47.0), Point2D::new(9.0, 48.0));
//! let mut index = GridIndex::new(extent, 0.1, 0.1)?;
//!
//! // Index a road edge by its graph id.
//! let edge = Segment2D::new(Point2D::new(8.12, 47.51), Point2D::new(8.87, 47.55));
//! index.add_segment(42u64, &edge);
//!
//! // Which edges lie near this rectangle?
//! let near = index.query(&Bounds::new(
//!     Point2D::new(8.4, 47.5),
//!     Point2D::new(8.6, 47.6),
//! ));
//! assert!(near.contains(&42));
//! # Ok::<(), marga_grid::GridError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! All arithmetic is planar in the supplied coordinate system; the index
//! neither projects nor computes geodesic distances. Feed it lon/lat degrees,
//! metres, or tile-local units, as long as queries use the same system.
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (`Point2D`, `GridCoord`, `Bounds`,
//!   `Segment2D`) and the upstream `Location` record
//! - [`grid`]: The grid index (configuration, clipping, boundary crossings,
//!   the store itself)
//! - [`error`]: Error types
//!
//! ## Data Flow
//!
//! ```text
//! insert: segment -> clip to extent -> cell walk -> per-cell id lists
//! query:  rectangle -> clamp to index range -> sweep cells -> id set
//! ```

pub mod core;
pub mod error;
pub mod grid;

pub use crate::core::{Bounds, GridCoord, Location, Point2D, Segment2D, StopType};
pub use crate::error::{GridError, Result};
pub use crate::grid::{CellCrossing, GridConfig, GridIndex};
