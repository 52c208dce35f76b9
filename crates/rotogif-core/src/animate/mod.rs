//! The rotation-animation pipeline.
//!
//! Ties the other modules together in one linear pass:
//! load → normalize to RGBA → generate rotated frames → encode → write.
//!
//! There is no retry or recovery anywhere in the pipeline; the first error
//! aborts the run. Encoding happens fully in memory, so a failure before the
//! final write leaves the output path untouched.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::decode::{ensure_rgba, load_image, LoadError};
use crate::encode::{encode_gif, EncodeError};
use crate::AnimationSettings;

mod frames;

pub use frames::{frame_angle, rotation_frames};

/// Errors that can occur while rendering a rotation animation.
#[derive(Debug, Error)]
pub enum AnimateError {
    /// The source image could not be read or decoded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The frame sequence could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The output file could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a looping rotation GIF of the image at `input` to `output`.
///
/// The source is normalized to RGBA, spun clockwise through
/// `settings.frame_count` evenly spaced angles, and written as an animated
/// GIF displaying each frame for `settings.frame_delay_ms` milliseconds,
/// looping forever. An existing file at `output` is overwritten.
///
/// # Errors
///
/// Any load, encode, or write failure aborts the run; see [`AnimateError`].
pub fn render_rotation_gif(
    input: &Path,
    output: &Path,
    settings: &AnimationSettings,
) -> Result<(), AnimateError> {
    let source = load_image(input)?;
    let normalized = ensure_rgba(source);
    let frames = rotation_frames(&normalized, settings.frame_count);
    let gif = encode_gif(frames, settings.frame_delay_ms)?;
    fs::write(output, gif)?;
    Ok(())
}
