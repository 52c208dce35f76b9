//! Normalizing a decoded image to a four-channel RGBA buffer.

use image::{DynamicImage, RgbaImage};

/// Guarantee an 8-bit RGBA buffer for the given image.
///
/// An image that is already RGBA8 is returned as-is, pixel for pixel, with no
/// conversion pass. Anything else (RGB, grayscale, 16-bit variants) is
/// converted, which leaves pixel content unchanged apart from gaining an
/// opaque alpha channel.
pub fn ensure_rgba(image: DynamicImage) -> RgbaImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    }
}
