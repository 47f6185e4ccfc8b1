//! Per-channel pixel value transforms
//!
//! Each transform is a pure mapping from one channel intensity to
//! another, applied independently to the R, G and B channels of a
//! sampled pixel. Transforms are selected by a stable index into
//! [`PixelTransform::CATALOG`]; the catalog order is part of the
//! external contract and must not change.
//!
//! Transforms that read their input validate it against [0, 255]
//! first. The three that ignore their input (`RandomizeChannel`,
//! `WhiteAll`, `BlackAll`) skip validation entirely.

use rand::Rng;

use crate::error::{FilterError, FilterResult};
use pixelate_core::color;

/// A named per-channel intensity transform.
///
/// The variant order here matches the catalog order; see
/// [`PixelTransform::CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelTransform {
    /// Two-level fade: >130 maps to 170, otherwise 80
    StonewashC,
    /// Two-level fade: >130 maps to 200, otherwise 50
    StonewashB,
    /// Two-level fade: >150 maps to 220, otherwise 30
    StonewashA,
    /// Tiered remap by intensity band; output is not re-clamped
    RangeShift,
    /// 255 - value
    Complement,
    /// >150 maps to 255, otherwise 0
    BlackWhiteThreshold,
    /// Uniform random value in [0, 255]; input ignored
    RandomizeChannel,
    /// Always 255; input ignored
    WhiteAll,
    /// Always 0; input ignored
    BlackAll,
}

impl PixelTransform {
    /// The ordered transform catalog.
    ///
    /// Callers select a transform by its position in this array, so
    /// insertion order is semantically meaningful.
    pub const CATALOG: [PixelTransform; 9] = [
        PixelTransform::StonewashC,
        PixelTransform::StonewashB,
        PixelTransform::StonewashA,
        PixelTransform::RangeShift,
        PixelTransform::Complement,
        PixelTransform::BlackWhiteThreshold,
        PixelTransform::RandomizeChannel,
        PixelTransform::WhiteAll,
        PixelTransform::BlackAll,
    ];

    /// Look up a transform by catalog index.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::TransformIndexOutOfRange`] if `index`
    /// is not a valid catalog position.
    pub fn from_index(index: usize) -> FilterResult<Self> {
        Self::CATALOG
            .get(index)
            .copied()
            .ok_or(FilterError::TransformIndexOutOfRange {
                index,
                len: Self::CATALOG.len(),
            })
    }

    /// Apply the transform to one channel value.
    ///
    /// Value-reading variants fail with
    /// [`FilterError::InvalidChannelValue`] when `value` is outside
    /// [0, 255]. `RangeShift` returns its tiered result without a
    /// clamp step.
    ///
    /// The generator is only consulted by `RandomizeChannel`.
    pub fn apply<R: Rng + ?Sized>(&self, value: i32, rng: &mut R) -> FilterResult<i32> {
        match self {
            Self::StonewashC => {
                check_channel(value)?;
                Ok(if value > 130 { 170 } else { 80 })
            }
            Self::StonewashB => {
                check_channel(value)?;
                Ok(if value > 130 { 200 } else { 50 })
            }
            Self::StonewashA => {
                check_channel(value)?;
                Ok(if value > 150 { 220 } else { 30 })
            }
            Self::RangeShift => {
                check_channel(value)?;
                Ok(range_shift(value))
            }
            Self::Complement => {
                check_channel(value)?;
                Ok(color::MAX_CHANNEL - value)
            }
            Self::BlackWhiteThreshold => {
                check_channel(value)?;
                Ok(if value > 150 { 255 } else { 0 })
            }
            Self::RandomizeChannel => Ok(rng.random_range(0..=color::MAX_CHANNEL)),
            Self::WhiteAll => Ok(255),
            Self::BlackAll => Ok(0),
        }
    }
}

/// Tiered intensity remap, highest band first.
fn range_shift(value: i32) -> i32 {
    if value > 200 {
        value - 25
    } else if value > 160 {
        value + 45
    } else if value > 120 {
        value + 35
    } else if value > 80 {
        value - 30
    } else if value > 40 {
        value - 25
    } else {
        value + 200
    }
}

fn check_channel(value: i32) -> FilterResult<()> {
    if color::is_valid_channel(value) {
        Ok(())
    } else {
        Err(FilterError::InvalidChannelValue { value })
    }
}
