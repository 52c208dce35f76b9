//! Animated GIF encoding.
//!
//! This module assembles an ordered frame sequence into a GIF89a byte stream
//! using the `image` crate's GIF encoder. Every frame is displayed for the
//! same configured duration and the animation loops forever (Netscape
//! infinite-loop extension).

use std::io::Cursor;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use thiserror::Error;

/// Palette quantization speed, 1 (slowest, smallest output) to 30.
const QUANTIZATION_SPEED: i32 = 1;

/// Errors that can occur during GIF encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The frame sequence is empty
    #[error("cannot encode an animation with no frames")]
    NoFrames,

    /// A frame's dimensions differ from frame 0's
    #[error(
        "frame {index} is {actual_w}x{actual_h}, expected {expected_w}x{expected_h} like frame 0"
    )]
    FrameSizeMismatch {
        index: usize,
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    /// GIF encoding failed
    #[error("GIF encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an owned frame sequence into animated GIF bytes.
///
/// # Arguments
///
/// * `frames` - Frames in playback order; all must share frame 0's dimensions
/// * `frame_delay_ms` - Display duration of each frame in milliseconds (the
///   GIF format stores centiseconds, so multiples of 10 survive exactly)
///
/// # Returns
///
/// The complete GIF file as bytes. The animation loops indefinitely.
///
/// # Errors
///
/// Returns [`EncodeError::NoFrames`] for an empty sequence,
/// [`EncodeError::FrameSizeMismatch`] if the frames disagree on dimensions,
/// and [`EncodeError::EncodingFailed`] if the underlying encoder rejects the
/// data.
pub fn encode_gif(frames: Vec<RgbaImage>, frame_delay_ms: u32) -> Result<Vec<u8>, EncodeError> {
    let (expected_w, expected_h) = match frames.first() {
        Some(first) => first.dimensions(),
        None => return Err(EncodeError::NoFrames),
    };

    for (index, frame) in frames.iter().enumerate() {
        let (actual_w, actual_h) = frame.dimensions();
        if (actual_w, actual_h) != (expected_w, expected_h) {
            return Err(EncodeError::FrameSizeMismatch {
                index,
                expected_w,
                expected_h,
                actual_w,
                actual_h,
            });
        }
    }

    let mut buffer = Cursor::new(Vec::new());

    {
        let mut encoder = GifEncoder::new_with_speed(&mut buffer, QUANTIZATION_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

        for frame in frames {
            let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
            encoder
                .encode_frame(Frame::from_parts(frame, 0, 0, delay))
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
    }

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgba};

    fn solid_frame(width: u32, height: u32, shade: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([shade, shade, shade, 255]))
    }

    fn frames(count: usize, width: u32, height: u32) -> Vec<RgbaImage> {
        (0..count)
            .map(|i| solid_frame(width, height, (i * 40) as u8))
            .collect()
    }

    /// The Netscape application extension is what makes a GIF loop forever.
    fn has_infinite_loop_block(bytes: &[u8]) -> bool {
        bytes.windows(11).any(|w| w == b"NETSCAPE2.0")
    }

    #[test]
    fn test_encode_gif_basic() {
        let gif = encode_gif(frames(3, 20, 20), 50).unwrap();

        // GIF89a signature
        assert_eq!(&gif[0..6], b"GIF89a");
        // Trailer byte
        assert_eq!(gif[gif.len() - 1], 0x3B);
    }

    #[test]
    fn test_encode_sets_infinite_loop() {
        let gif = encode_gif(frames(2, 10, 10), 50).unwrap();
        assert!(has_infinite_loop_block(&gif));
    }

    #[test]
    fn test_roundtrip_frame_count_delay_dimensions() {
        let gif = encode_gif(frames(4, 25, 15), 50).unwrap();

        let decoder = GifDecoder::new(Cursor::new(gif)).unwrap();
        let decoded = decoder.into_frames().collect_frames().unwrap();

        assert_eq!(decoded.len(), 4);
        for frame in &decoded {
            assert_eq!(frame.buffer().dimensions(), (25, 15));
            assert_eq!(frame.delay().numer_denom_ms(), (50, 1));
        }
    }

    #[test]
    fn test_single_frame_animation() {
        let gif = encode_gif(frames(1, 10, 10), 100).unwrap();

        let decoder = GifDecoder::new(Cursor::new(gif)).unwrap();
        let decoded = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn test_empty_frames_rejected() {
        let result = encode_gif(Vec::new(), 50);
        assert!(matches!(result, Err(EncodeError::NoFrames)));
    }

    #[test]
    fn test_mismatched_dimensions_rejected() {
        let mut set = frames(2, 20, 20);
        set.push(solid_frame(20, 21, 0));

        let result = encode_gif(set, 50);
        match result {
            Err(EncodeError::FrameSizeMismatch {
                index,
                expected_w,
                expected_h,
                actual_w,
                actual_h,
            }) => {
                assert_eq!(index, 2);
                assert_eq!((expected_w, expected_h), (20, 20));
                assert_eq!((actual_w, actual_h), (20, 21));
            }
            other => panic!("expected FrameSizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_transparent_pixels_survive() {
        let mut frame = solid_frame(8, 8, 200);
        frame.put_pixel(0, 0, Rgba([0, 0, 0, 0]));

        let gif = encode_gif(vec![frame], 50).unwrap();
        let decoder = GifDecoder::new(Cursor::new(gif)).unwrap();
        let decoded = decoder.into_frames().collect_frames().unwrap();

        assert_eq!(decoded[0].buffer().get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_error_display() {
        let err = EncodeError::FrameSizeMismatch {
            index: 3,
            expected_w: 100,
            expected_h: 100,
            actual_w: 90,
            actual_h: 100,
        };
        assert_eq!(
            err.to_string(),
            "frame 3 is 90x100, expected 100x100 like frame 0"
        );

        assert_eq!(
            EncodeError::NoFrames.to_string(),
            "cannot encode an animation with no frames"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
