//! Decoding a source image from disk or from memory.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use thiserror::Error;

/// Errors that can occur while loading a source image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The bytes are not a recognized or decodable image format.
    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// Decode an image from raw bytes, guessing the format from the content.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if the bytes are not a valid image in any
/// supported format.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::Decode(e.to_string()))?;

    reader.decode().map_err(|e| LoadError::Decode(e.to_string()))
}

/// Load and decode an image from a file path.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file does not exist or cannot be read,
/// and [`LoadError::Decode`] if its contents are not a valid image.
pub fn load_image(path: &Path) -> Result<DynamicImage, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    decode_image(&bytes)
}
