//! Image loading and color-mode normalization.
//!
//! This module provides functionality for:
//! - Decoding a raster image from a file path or from raw bytes
//! - Normalizing the decoded image to an RGBA buffer
//!
//! The format is guessed from the file contents, not the extension, so a
//! mislabeled PNG or JPEG still decodes. Everything downstream of this module
//! works on `image::RgbaImage` exclusively.

mod load;
mod normalize;

pub use load::{decode_image, load_image, LoadError};
pub use normalize::ensure_rgba;
