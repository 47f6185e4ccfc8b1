//! Pixelate Core - Basic data structures for scanline pixelation
//!
//! This crate provides the fundamental types used throughout the
//! pixelate-rs library:
//!
//! - [`RasterMut`] - A borrowed, mutable view over a caller-owned flat
//!   RGBA pixel buffer
//! - [`color`] - Channel offsets and channel-value helpers
//! - [`Error`] / [`Result`] - Core error type
//!
//! The library never owns image data: a decoded image arrives as a flat
//! `&mut [u8]` (RGBA, row-major) together with its dimensions, and every
//! operation mutates that buffer in place.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::RasterMut;

/// Color channel byte offsets and helper functions for flat RGBA buffers.
///
/// # Pixel format
///
/// Each pixel occupies four consecutive bytes in the order
/// `[R, G, B, A]`; pixels are laid out row-major.
pub mod color {
    /// Red channel (byte 0 of each pixel)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Bytes per pixel
    pub const CHANNELS: usize = 4;

    /// Maximum channel intensity
    pub const MAX_CHANNEL: i32 = 255;

    /// Check whether a value lies in the valid channel range [0, 255].
    #[inline]
    pub fn is_valid_channel(value: i32) -> bool {
        (0..=MAX_CHANNEL).contains(&value)
    }

    /// Clamp a channel value into [0, 255] and narrow it to a byte.
    ///
    /// Stores into an RGBA buffer saturate rather than wrap, the same
    /// way a browser's `Uint8ClampedArray` behaves on assignment.
    #[inline]
    pub fn clamp_channel(value: i32) -> u8 {
        value.clamp(0, MAX_CHANNEL) as u8
    }

}
