//! Error types for pixelate-core
//!
//! Provides a unified error type for operations on borrowed rasters.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Pixelate-rs core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer length does not match the declared dimensions
    #[error(
        "buffer size mismatch for {width}x{height}: expected {expected} bytes, got {actual}"
    )]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinate outside the raster
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
