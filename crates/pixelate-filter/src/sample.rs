//! Scanline sampling engine
//!
//! For every scanline the engine draws a fixed number of random
//! columns (with replacement) and applies the selected transform to
//! the R, G and B channels of each drawn pixel, in place. Alpha is
//! never touched.
//!
//! Column draws are uniform over the full width, or over the central
//! half of the width when area restriction is requested.

use rand::Rng;

use crate::error::FilterResult;
use crate::transform::PixelTransform;
use pixelate_core::{RasterMut, color};

/// Parameters for one pixelation pass.
///
/// Supplied per invocation; the engine holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct PixelateOptions {
    /// Number of sampled pixels per scanline. Draws are with
    /// replacement, so this counts write attempts, not distinct
    /// pixels; it may exceed the width. Zero means no-op.
    pub samples_per_row: u32,
    /// Catalog index of the transform to apply; see
    /// [`PixelTransform::CATALOG`].
    pub transform_index: usize,
    /// Restrict column draws to the central half of the width,
    /// `[width/4, width/4 + width/2)`.
    pub restrict_to_center: bool,
}

/// Apply a pixelation pass using the thread-local generator.
///
/// See [`pixelate_with_rng`] for the full contract.
pub fn pixelate(raster: &mut RasterMut<'_>, opts: &PixelateOptions) -> FilterResult<()> {
    pixelate_with_rng(raster, opts, &mut rand::rng())
}

/// Apply a pixelation pass with a caller-supplied generator.
///
/// The transform index is resolved once, before any pixel is touched,
/// so an invalid index leaves the buffer byte-for-byte unchanged. A
/// transform failure mid-pass aborts immediately without rolling back
/// pixels already written.
///
/// # Errors
///
/// - [`crate::FilterError::TransformIndexOutOfRange`] for an index
///   outside the catalog
/// - [`crate::FilterError::InvalidChannelValue`] propagated from a
///   validating transform
pub fn pixelate_with_rng<R: Rng + ?Sized>(
    raster: &mut RasterMut<'_>,
    opts: &PixelateOptions,
    rng: &mut R,
) -> FilterResult<()> {
    // Fail fast on a bad index, even when the pass would be a no-op.
    let transform = PixelTransform::from_index(opts.transform_index)?;

    let width = raster.width();
    let height = raster.height();
    if width == 0 || height == 0 || opts.samples_per_row == 0 {
        return Ok(());
    }

    let (col_base, col_span) = if opts.restrict_to_center {
        (width / 4, width / 2)
    } else {
        (0, width)
    };
    // width 1 with area restriction leaves an empty center band
    if col_span == 0 {
        return Ok(());
    }

    let data = raster.data_mut();
    for row in 0..height {
        for _ in 0..opts.samples_per_row {
            let column = col_base + rng.random_range(0..col_span);
            let offset = (row as usize * width as usize + column as usize) * color::CHANNELS;
            for channel in [color::RED, color::GREEN, color::BLUE] {
                let value = data[offset + channel] as i32;
                let mapped = transform.apply(value, rng)?;
                data[offset + channel] = color::clamp_channel(mapped);
            }
        }
    }
    Ok(())
}

/// Convenience wrapper taking the raw buffer and dimensions directly.
///
/// Validates the buffer length, then runs [`pixelate`].
pub fn pixelate_bytes(
    data: &mut [u8],
    width: u32,
    height: u32,
    opts: &PixelateOptions,
) -> FilterResult<()> {
    let mut raster = RasterMut::new(data, width, height)?;
    pixelate(&mut raster, opts)
}
