//! Error types for color conversion.

use thiserror::Error;

/// Validation failures raised by the color core.
///
/// Each call is independent, so a rejected input never affects later calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input is not a `#rrggbb` hex string.
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),
    /// The picker surface has a non-positive (or non-finite) size.
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidSurfaceDimensions { width: f64, height: f64 },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
