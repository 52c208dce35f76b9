//! Image transformation operations.
//!
//! Currently a single operation: rotation about the image center on a fixed
//! canvas. Frames of a rotation animation are all produced through this
//! module, each one derived directly from the source image.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Origin is the top-left corner, y grows downward
//! - The output canvas always matches the input canvas; content rotated
//!   beyond the bounds is cropped and uncovered area is transparent

mod rotation;

pub use rotation::{rotate_about_center, ResampleFilter};
