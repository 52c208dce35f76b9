//! Image rotation with bilinear and bicubic interpolation.
//!
//! The rotation uses inverse mapping: for each pixel in the output image, we
//! calculate which source position contributes to it and interpolate the
//! four-channel value there.
//!
//! For rotation by angle θ about the center, the inverse transform is:
//! ```text
//! src_x = (dst_x - cx) * cos(-θ) + (dst_y - cy) * sin(-θ) + cx
//! src_y = -(dst_x - cx) * sin(-θ) + (dst_y - cy) * cos(-θ) + cy
//! ```
//!
//! The output canvas is never expanded: a non-square image loses its corners
//! when rotated, and destination pixels with no source counterpart are fully
//! transparent.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Interpolation filter for rotation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResampleFilter {
    /// Fast bilinear interpolation - acceptable for previews.
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation - the quality the output ships with.
    #[default]
    Bicubic,
}

/// Rotate an image about its center onto a same-sized canvas.
///
/// Positive angles rotate counter-clockwise; angles are taken modulo 360, so
/// `-90` and `270` produce the same result. A zero (or full-turn) angle
/// returns a pixel-identical copy of the input.
///
/// Destination pixels that map outside the source bounds come out fully
/// transparent. The canvas is never expanded, so corners of a non-square
/// source crop during rotation.
pub fn rotate_about_center(
    image: &RgbaImage,
    angle_degrees: f64,
    filter: ResampleFilter,
) -> RgbaImage {
    let turn = angle_degrees.rem_euclid(360.0);

    // Fast path: no rotation needed (including full turns)
    if turn < 0.001 || turn > 359.999 {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;

    let angle_rad = -turn.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let mut output = RgbaImage::new(width, height);

    for dst_y in 0..height {
        for dst_x in 0..width {
            // Translate destination point to origin at center
            let dx = dst_x as f64 - cx;
            let dy = dst_y as f64 - cy;

            // Apply inverse rotation to find source coordinates
            let src_x = dx * cos + dy * sin + cx;
            let src_y = -dx * sin + dy * cos + cy;

            let pixel = match filter {
                ResampleFilter::Bilinear => sample_bilinear(image, src_x, src_y),
                ResampleFilter::Bicubic => sample_bicubic(image, src_x, src_y),
            };

            output.put_pixel(dst_x, dst_y, Rgba(pixel));
        }
    }

    output
}

/// Get a pixel as [f64; 4] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &RgbaImage, px: u32, py: u32) -> [f64; 4] {
    let p = image.get_pixel(px, py).0;
    [p[0] as f64, p[1] as f64, p[2] as f64, p[3] as f64]
}

/// Sample a pixel using bilinear interpolation.
///
/// Considers the 4 nearest pixels and weights their contribution by
/// distance. Out-of-bounds positions sample as transparent.
fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width() as i64, image.height() as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return TRANSPARENT;
    }

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 4];
    for c in 0..4 {
        let v = p00[c] * (1.0 - fx) * (1.0 - fy)
            + p10[c] * fx * (1.0 - fy)
            + p01[c] * (1.0 - fx) * fy
            + p11[c] * fx * fy;
        result[c] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}

/// Sample a pixel using bicubic (Catmull-Rom) interpolation.
///
/// Considers a 4x4 neighborhood, giving smoother results than bilinear for
/// rotated edges. Falls back to bilinear where the kernel would reach past
/// the image border.
fn sample_bicubic(image: &RgbaImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width() as i64, image.height() as i64);

    // The kernel needs one pixel of margin below and two above floor(x)
    if x < 1.0 || x >= (w - 2) as f64 || y < 1.0 || y >= (h - 2) as f64 {
        return sample_bilinear(image, x, y);
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -1..=2 {
        for kx in -1..=2 {
            let px = x0 + kx;
            let py = y0 + ky;

            let weight = cubic_weight(x - px as f64) * cubic_weight(y - py as f64);
            let pixel = get_pixel_f64(image, px as u32, py as u32);

            for c in 0..4 {
                sum[c] += pixel[c] * weight;
            }
            weight_sum += weight;
        }
    }

    let mut result = [0u8; 4];
    if weight_sum > 0.0 {
        for c in 0..4 {
            result[c] = (sum[c] / weight_sum).clamp(0.0, 255.0).round() as u8;
        }
    }

    result
}

/// Catmull-Rom cubic kernel weight (Keys, a = -0.5).
///
/// ```text
/// W(t) = (a+2)|t|³ - (a+3)|t|² + 1   for |t| <= 1
/// W(t) = a|t|³ - 5a|t|² + 8a|t| - 4a for 1 < |t| < 2
/// W(t) = 0                           for |t| >= 2
/// ```
fn cubic_weight(t: f64) -> f64 {
    const A: f64 = -0.5;
    let t = t.abs();

    if t <= 1.0 {
        (A + 2.0) * t * t * t - (A + 3.0) * t * t + 1.0
    } else if t < 2.0 {
        A * t * t * t - 5.0 * A * t * t + 8.0 * A * t - 4.0 * A
    } else {
        0.0
    }
}
