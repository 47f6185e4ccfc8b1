//! pixelate-test - Test support for pixelate-rs
//!
//! The engine consumes decoded pixel buffers, so the integration
//! suites work on synthetic rasters instead of image files. This crate
//! provides deterministic buffer builders and a few comparison helpers
//! shared by the `tests/*_reg.rs` suites.

use pixelate_core::color;

/// Build a deterministic RGBA gradient buffer.
///
/// Red tracks the column, green the row, blue their sum (all mod 256);
/// alpha is constant.
pub fn gradient_raster(width: u32, height: u32, alpha: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(width as usize * height as usize * color::CHANNELS);
    for y in 0..height {
        for x in 0..width {
            buf.push((x % 256) as u8);
            buf.push((y % 256) as u8);
            buf.push(((x + y) % 256) as u8);
            buf.push(alpha);
        }
    }
    buf
}

/// Build a solid-color RGBA buffer.
pub fn solid_raster(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let pixels = width as usize * height as usize;
    let mut buf = Vec::with_capacity(pixels * color::CHANNELS);
    for _ in 0..pixels {
        buf.extend_from_slice(&rgba);
    }
    buf
}

/// Count pixels whose RGB channels differ between two equal-length
/// buffers (alpha differences are ignored).
///
/// # Panics
///
/// Panics if the buffers differ in length.
pub fn count_changed_pixels(before: &[u8], after: &[u8]) -> usize {
    assert_eq!(before.len(), after.len(), "buffer length mismatch");
    before
        .chunks_exact(color::CHANNELS)
        .zip(after.chunks_exact(color::CHANNELS))
        .filter(|(b, a)| b[..color::ALPHA] != a[..color::ALPHA])
        .count()
}

/// Assert the alpha channel is byte-for-byte identical between two
/// buffers.
///
/// # Panics
///
/// Panics with the offending pixel index if any alpha byte changed.
pub fn assert_alpha_preserved(before: &[u8], after: &[u8]) {
    assert_eq!(before.len(), after.len(), "buffer length mismatch");
    for (i, (b, a)) in before
        .chunks_exact(color::CHANNELS)
        .zip(after.chunks_exact(color::CHANNELS))
        .enumerate()
    {
        assert_eq!(
            b[color::ALPHA],
            a[color::ALPHA],
            "alpha changed at pixel {i}"
        );
    }
}
