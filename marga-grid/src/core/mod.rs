//! Core types for marga-grid.
//!
//! This module provides the fundamental geometric types:
//! - [`Point2D`]: 2D point/vector in planar coordinates
//! - [`GridCoord`]: integer cell coordinate
//! - [`Bounds`]: axis-aligned bounding box
//! - [`Segment2D`]: line segment with single-point intersection
//! - [`Location`]: upstream routing-input record (not referenced by the index)
//!
//! The x-axis maps to grid columns and the y-axis to grid rows throughout.

pub mod bounds;
pub mod location;
pub mod point;
pub mod segment;

pub use bounds::Bounds;
pub use location::{Location, StopType};
pub use point::{GridCoord, Point2D};
pub use segment::Segment2D;
