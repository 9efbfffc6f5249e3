//! Error types for marga-grid.

use thiserror::Error;

/// Errors raised while building a grid index.
///
/// Construction is the only fallible operation; insertion and queries
/// tolerate degenerate inputs by producing empty effects.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// The outer extent has non-positive width or height.
    #[error("invalid grid extent {width} x {height}: extent must have positive area")]
    InvalidExtent { width: f32, height: f32 },

    /// The requested cell dimensions are non-positive.
    #[error("invalid cell size {width} x {height}: cells must have positive area")]
    InvalidCellSize { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, GridError>;
