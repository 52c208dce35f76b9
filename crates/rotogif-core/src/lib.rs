//! Rotogif Core - Rotation animation library
//!
//! This crate provides the core functionality for Rotogif: decoding a static
//! image, deriving a sequence of rotated copies from it, and assembling those
//! copies into a looping animated GIF.
//!
//! The pipeline is strictly linear: load → normalize to RGBA → generate
//! frames → encode.

pub mod animate;
pub mod decode;
pub mod encode;
pub mod transform;

pub use animate::{frame_angle, render_rotation_gif, rotation_frames, AnimateError};
pub use decode::{decode_image, ensure_rgba, load_image, LoadError};
pub use encode::{encode_gif, EncodeError};
pub use transform::{rotate_about_center, ResampleFilter};

/// Settings for a rotation animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSettings {
    /// Number of frames spread evenly over one full turn.
    pub frame_count: u32,
    /// Display duration of each frame in milliseconds.
    pub frame_delay_ms: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            // 36 frames, 10 degrees apart, 50ms each: one full turn in 1.8s
            frame_count: 36,
            frame_delay_ms: 50,
        }
    }
}

impl AnimationSettings {
    /// Create settings with the default frame count and delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if both values are at their defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Rotation step between consecutive frames, in degrees.
    pub fn degrees_per_frame(&self) -> f64 {
        360.0 / self.frame_count as f64
    }
}
