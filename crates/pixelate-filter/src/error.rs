//! Error types for pixelate-filter
//!
//! Both variants signal caller contract violations, not data
//! conditions: a failing transform or a bad catalog index aborts the
//! whole pixelation pass.

use thiserror::Error;

/// Errors that can occur during pixelation
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelate_core::Error),

    /// Channel value outside [0, 255] reached a validating transform
    #[error("invalid channel value: {value} is outside [0, 255]")]
    InvalidChannelValue { value: i32 },

    /// Transform index outside the catalog
    #[error("transform index out of range: {index} >= {len}")]
    TransformIndexOutOfRange { index: usize, len: usize },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
