//! Borrowed mutable raster view
//!
//! [`RasterMut`] wraps a caller-owned flat RGBA buffer together with its
//! dimensions. Construction validates the buffer length once; after
//! that, offset arithmetic inside the view cannot run past the slice.
//!
//! The view never copies pixel data. Ownership stays with the caller,
//! which hands the mutated buffer back to its rendering surface.

use crate::color;
use crate::error::{Error, Result};

/// Mutable view over a flat RGBA pixel buffer.
///
/// The buffer holds `width * height` pixels of four bytes each
/// (`[R, G, B, A]`), row-major.
#[derive(Debug)]
pub struct RasterMut<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> RasterMut<'a> {
    /// Wrap a borrowed buffer, validating its length against the
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if
    /// `data.len() != width * height * 4`.
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * color::CHANNELS;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the underlying bytes
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Mutably borrow the underlying bytes
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// Byte offset of the pixel at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * color::CHANNELS)
    }

    /// Get RGBA values at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        let off = self.pixel_offset(x, y)?;
        Some((
            self.data[off + color::RED],
            self.data[off + color::GREEN],
            self.data[off + color::BLUE],
            self.data[off + color::ALPHA],
        ))
    }

    /// Set the RGB channels at (x, y), leaving alpha unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if (x, y) is outside
    /// the raster.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        let off = self
            .pixel_offset(x, y)
            .ok_or(Error::CoordinateOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })?;
        self.data[off + color::RED] = r;
        self.data[off + color::GREEN] = g;
        self.data[off + color::BLUE] = b;
        Ok(())
    }
}
