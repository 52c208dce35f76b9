//! Animated image encoding.
//!
//! This module provides functionality for:
//! - Encoding an ordered frame sequence to an animated GIF with a fixed
//!   per-frame delay and an infinite loop
//!
//! Encoding happens entirely in memory; callers decide where the bytes go.

mod gif;

pub use gif::{encode_gif, EncodeError};
