//! pixelate-filter - Pixel transform catalog and sampling engine
//!
//! This crate provides the two halves of the scanline pixelation
//! pipeline:
//!
//! - [`PixelTransform`] - an ordered catalog of per-channel intensity
//!   transforms, selected by a stable index
//! - [`pixelate`] / [`pixelate_with_rng`] / [`pixelate_bytes`] - the
//!   engine that applies a selected transform to a random sample of
//!   pixels on every scanline, mutating the buffer in place
//!
//! # Example
//!
//! ```
//! use pixelate_core::RasterMut;
//! use pixelate_filter::{pixelate, PixelateOptions};
//!
//! let mut buf = vec![128u8; 16 * 16 * 4];
//! let mut raster = RasterMut::new(&mut buf, 16, 16).unwrap();
//! let opts = PixelateOptions {
//!     samples_per_row: 5,
//!     transform_index: 4, // complement
//!     restrict_to_center: false,
//! };
//! pixelate(&mut raster, &opts).unwrap();
//! ```

mod error;
pub mod sample;
pub mod transform;

pub use error::{FilterError, FilterResult};
pub use sample::{PixelateOptions, pixelate, pixelate_bytes, pixelate_with_rng};
pub use transform::PixelTransform;
