//! "Reveal your true alien form" filter.
//!
//! Colour shift (hue-rotate 90°, saturate 150%), then noise bars, then
//! blocky pixelation patches.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::DmvResult;
use crate::random::Dice;

const HUE_ROTATION_DEGREES: i32 = 90;
const SATURATION: f64 = 1.5;
const NOISE_BARS: usize = 10;
const NOISE_ALPHA: f64 = 0.8;
const PIXEL_PATCHES: usize = 5;

/// Apply the full alien treatment to a captured frame.
pub fn alienize(frame: &RgbaImage, dice: &mut impl Dice) -> RgbaImage {
    let mut img = imageops::huerotate(frame, HUE_ROTATION_DEGREES);
    saturate(&mut img, SATURATION);
    for _ in 0..NOISE_BARS {
        noise_bar(&mut img, dice);
    }
    for _ in 0..PIXEL_PATCHES {
        pixel_patch(&mut img, dice);
    }
    img
}

/// CSS-style `saturate()` colour matrix.
pub fn saturate(img: &mut RgbaImage, amount: f64) {
    let s = amount;
    let m = [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ];
    for px in img.pixels_mut() {
        let [r, g, b, a] = px.0;
        let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
        let mix = |row: [f64; 3]| (row[0] * r + row[1] * g + row[2] * b).round().clamp(0.0, 255.0) as u8;
        *px = Rgba([mix(m[0]), mix(m[1]), mix(m[2]), a]);
    }
}

/// Translucent random-coloured bar at a random spot.
fn noise_bar(img: &mut RgbaImage, dice: &mut impl Dice) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let x0 = dice.between(0.0, f64::from(w)) as u32;
    let y0 = dice.between(0.0, f64::from(h)) as u32;
    let bar_w = dice.between(5.0, 25.0) as u32;
    let bar_h = dice.between(2.0, 7.0) as u32;
    let colour = [
        dice.between(0.0, 255.0),
        dice.between(0.0, 255.0),
        dice.between(0.0, 255.0),
    ];

    for y in y0..(y0 + bar_h).min(h) {
        for x in x0..(x0 + bar_w).min(w) {
            let px = img.get_pixel_mut(x, y);
            for (c, over) in px.0.iter_mut().take(3).zip(colour) {
                let blended = over * NOISE_ALPHA + f64::from(*c) * (1.0 - NOISE_ALPHA);
                *c = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Square patch redrawn with coarse pixels sampled from each cell's corner.
/// Only cells that fit strictly inside the patch are redrawn.
fn pixel_patch(img: &mut RgbaImage, dice: &mut impl Dice) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let x0 = dice.between(0.0, f64::from(w.saturating_sub(50))) as u32;
    let y0 = dice.between(0.0, f64::from(h.saturating_sub(50))) as u32;
    let size = dice.between(10.0, 40.0) as u32;
    let cell = 2 + dice.below(5) as u32;

    for py in (0..size).step_by(cell as usize).take_while(|py| py + cell < size) {
        for px in (0..size).step_by(cell as usize).take_while(|px| px + cell < size) {
            let (cx, cy) = (x0 + px, y0 + py);
            if cx >= w || cy >= h {
                continue;
            }
            let sample = *img.get_pixel(cx, cy);
            for y in cy..(cy + cell).min(h) {
                for x in cx..(cx + cell).min(w) {
                    img.put_pixel(x, y, sample);
                }
            }
        }
    }
}

/// Encode as a `data:image/png;base64,...` URL for display.
pub fn to_png_data_url(img: &RgbaImage) -> DmvResult<String> {
    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(img.clone()).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buffer)))
}
