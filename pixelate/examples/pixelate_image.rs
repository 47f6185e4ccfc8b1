//! Decode an image file, run a pixelation pass, and save the result.
//!
//! This plays the host-glue role: decode to RGBA with the `image`
//! crate, hand the raw buffer to the engine, write the mutated buffer
//! back out.
//!
//! Usage:
//!
//! ```text
//! cargo run --example pixelate_image -- input.png output.png [samples] [transform] [area]
//! ```
//!
//! `samples` defaults to 5, `transform` is a catalog index 0..=8
//! (default 0), and any positive `area` value restricts sampling to
//! the central half of the width.

use pixelate::filter::{PixelateOptions, pixelate_bytes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .ok_or("usage: pixelate_image <input> <output> [samples] [transform] [area]")?;
    let output = args.next().ok_or("missing output path")?;
    let samples_per_row: u32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(5);
    let transform_index: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0);
    let restrict_to_center = args
        .next()
        .map(|s| s.parse::<i64>().map(|v| v > 0))
        .transpose()?
        .unwrap_or(false);

    let img = image::open(&input)?.to_rgba8();
    let (width, height) = img.dimensions();
    let mut data = img.into_raw();

    pixelate_bytes(
        &mut data,
        width,
        height,
        &PixelateOptions {
            samples_per_row,
            transform_index,
            restrict_to_center,
        },
    )?;

    let result = image::RgbaImage::from_raw(width, height, data)
        .ok_or("buffer length changed during pixelation")?;
    result.save(&output)?;
    println!("wrote {output}");
    Ok(())
}
