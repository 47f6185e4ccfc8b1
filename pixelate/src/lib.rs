//! Pixelate - Scanline pixelation for RGBA buffers
//!
//! This library applies a selected per-channel intensity transform to
//! a small random sample of pixels on every scanline of a decoded
//! image, mutating the caller's flat RGBA buffer in place.
//!
//! Image decoding, encoding and display stay with the host: the
//! library's boundary is a buffer, its dimensions, and a parameter
//! struct.
//!
//! # Example
//!
//! ```
//! use pixelate::RasterMut;
//! use pixelate::filter::{PixelateOptions, pixelate};
//!
//! // a decoded 32x32 RGBA image (here: solid gray)
//! let mut data = vec![128u8; 32 * 32 * 4];
//!
//! let mut raster = RasterMut::new(&mut data, 32, 32).unwrap();
//! let opts = PixelateOptions {
//!     samples_per_row: 5,
//!     transform_index: 5, // black/white threshold
//!     restrict_to_center: true,
//! };
//! pixelate(&mut raster, &opts).unwrap();
//!
//! // alpha bytes are never touched
//! assert!(data.chunks_exact(4).all(|p| p[3] == 128));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixelate_core::*;

// Re-export the filter crate as a module
pub use pixelate_filter as filter;
