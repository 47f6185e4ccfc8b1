//! Pixelation engine regression test
//!
//! End-to-end passes over synthetic rasters: sampling counts, area
//! restriction, alpha preservation, and failure semantics.

use pixelate_core::RasterMut;
use pixelate_filter::{FilterError, PixelateOptions, pixelate_bytes, pixelate_with_rng};
use pixelate_test::{assert_alpha_preserved, count_changed_pixels, gradient_raster, solid_raster};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn opts(samples: u32, index: usize, center: bool) -> PixelateOptions {
    PixelateOptions {
        samples_per_row: samples,
        transform_index: index,
        restrict_to_center: center,
    }
}

#[test]
fn pixelate_reg_alpha_preserved_for_all_transforms() {
    for index in 0..9 {
        let before = gradient_raster(20, 10, 137);
        let mut after = before.clone();
        pixelate_bytes(&mut after, 20, 10, &opts(7, index, false))
            .unwrap_or_else(|e| panic!("transform {index}: {e}"));
        assert_alpha_preserved(&before, &after);
    }
}

#[test]
fn pixelate_reg_samples_bound_touched_pixels() {
    // WhiteAll on a black raster marks exactly the sampled pixels;
    // with replacement, per-row changes are in [1, samples].
    let width = 64u32;
    let height = 16u32;
    let samples = 5u32;
    let before = solid_raster(width, height, [0, 0, 0, 255]);
    let mut after = before.clone();
    let mut raster = RasterMut::new(&mut after, width, height).unwrap();
    pixelate_with_rng(&mut raster, &opts(samples, 7, false), &mut StdRng::seed_from_u64(11))
        .unwrap();

    for row in 0..height as usize {
        let start = row * width as usize * 4;
        let end = start + width as usize * 4;
        let changed = count_changed_pixels(&before[start..end], &after[start..end]);
        assert!(
            (1..=samples as usize).contains(&changed),
            "row {row}: {changed} changed pixels"
        );
    }
}

#[test]
fn pixelate_reg_center_restriction_many_trials() {
    let width = 37u32;
    let height = 3u32;
    let lo = width / 4;
    let hi = lo + width / 2;

    for seed in 0..50 {
        let before = solid_raster(width, height, [10, 10, 10, 50]);
        let mut after = before.clone();
        let mut raster = RasterMut::new(&mut after, width, height).unwrap();
        pixelate_with_rng(&mut raster, &opts(30, 7, true), &mut StdRng::seed_from_u64(seed))
            .unwrap();

        for y in 0..height {
            for x in 0..width {
                let off = ((y * width + x) * 4) as usize;
                if after[off] != before[off] {
                    assert!(
                        (lo..hi).contains(&x),
                        "seed {seed}: column {x} outside [{lo}, {hi})"
                    );
                }
            }
        }
    }
}

#[test]
fn pixelate_reg_oversampling_allowed() {
    // samples far beyond the width simply revisit pixels
    let before = solid_raster(4, 4, [50, 60, 70, 80]);
    let mut after = before.clone();
    pixelate_bytes(&mut after, 4, 4, &opts(100, 8, false)).unwrap();
    assert_alpha_preserved(&before, &after);
    for row in 0..4 {
        let start = row * 4 * 4;
        let end = start + 4 * 4;
        let changed = count_changed_pixels(&before[start..end], &after[start..end]);
        assert!(changed >= 1, "row {row} untouched after 100 draws");
        // every changed pixel is fully black
        for pixel in after[start..end].chunks_exact(4) {
            assert!(pixel[..3] == [50, 60, 70] || pixel[..3] == [0, 0, 0]);
        }
    }
}

#[test]
fn pixelate_reg_zero_samples_unchanged() {
    let before = gradient_raster(33, 7, 9);
    let mut after = before.clone();
    pixelate_bytes(&mut after, 33, 7, &opts(0, 3, true)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn pixelate_reg_invalid_index_fails_before_mutation() {
    let before = gradient_raster(10, 10, 0);
    let mut after = before.clone();
    let err = pixelate_bytes(&mut after, 10, 10, &opts(4, 42, false)).unwrap_err();
    assert!(matches!(
        err,
        FilterError::TransformIndexOutOfRange { index: 42, len: 9 }
    ));
    assert_eq!(before, after);
}

#[test]
fn pixelate_reg_complement_involution() {
    // complement twice with full-width coverage via direct transform
    // application is tested in the unit suite; here check a pass with
    // the complement transform only ever writes 255 - old value.
    let width = 16u32;
    let height = 8u32;
    let before = gradient_raster(width, height, 21);
    let mut after = before.clone();
    let mut raster = RasterMut::new(&mut after, width, height).unwrap();
    pixelate_with_rng(&mut raster, &opts(6, 4, false), &mut StdRng::seed_from_u64(5)).unwrap();

    for (b, a) in before.chunks_exact(4).zip(after.chunks_exact(4)) {
        if b[..3] == a[..3] {
            continue;
        }
        for c in 0..3 {
            assert_eq!(a[c], 255 - b[c]);
        }
    }
}
