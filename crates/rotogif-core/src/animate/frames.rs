//! Deriving the rotated frame sequence from a normalized image.

use image::RgbaImage;

use crate::transform::{rotate_about_center, ResampleFilter};

/// Rotation angle of frame `index` in a `frame_count`-frame animation, in
/// degrees. Angles are evenly spaced over one full turn, so the step after
/// the last frame coincides with frame 0.
///
/// `frame_count` must be non-zero.
pub fn frame_angle(index: u32, frame_count: u32) -> f64 {
    index as f64 * (360.0 / frame_count as f64)
}

/// Generate the ordered frame sequence for a full clockwise turn.
///
/// Each frame is rotated independently from `source` (never from the
/// previous frame, so no resampling drift accumulates) with bicubic
/// interpolation on a canvas matching the source dimensions. Frame 0 is a
/// pixel-identical copy of `source`.
///
/// A `frame_count` of zero yields an empty sequence; the encoder downstream
/// rejects it.
pub fn rotation_frames(source: &RgbaImage, frame_count: u32) -> Vec<RgbaImage> {
    (0..frame_count)
        .map(|i| {
            // Negative angle: the animation spins clockwise
            let angle = -frame_angle(i, frame_count);
            rotate_about_center(source, angle, ResampleFilter::Bicubic)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn test_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 13 % 256) as u8, (y * 7 % 256) as u8, 100, 255])
        })
    }

    #[test]
    fn test_frame_count_matches() {
        let img = test_image(16, 16);
        for n in [1, 2, 4, 36] {
            assert_eq!(rotation_frames(&img, n).len(), n as usize);
        }
    }

    #[test]
    fn test_zero_frames_yields_empty() {
        let img = test_image(8, 8);
        assert!(rotation_frames(&img, 0).is_empty());
    }

    #[test]
    fn test_first_frame_is_pixel_identical() {
        let img = test_image(20, 14);
        let frames = rotation_frames(&img, 12);
        assert_eq!(frames[0].as_raw(), img.as_raw());
    }

    #[test]
    fn test_all_frames_keep_source_dimensions() {
        let img = test_image(30, 20);
        for frame in rotation_frames(&img, 8) {
            assert_eq!(frame.dimensions(), (30, 20));
        }
    }

    #[test]
    fn test_angles_evenly_spaced() {
        for n in [1u32, 4, 36, 360] {
            let step = 360.0 / n as f64;
            for i in 0..n {
                assert!((frame_angle(i, n) - i as f64 * step).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_reference_instance_angles() {
        // 36 frames, 10 degrees apart
        assert!((frame_angle(0, 36) - 0.0).abs() < 1e-9);
        assert!((frame_angle(1, 36) - 10.0).abs() < 1e-9);
        assert!((frame_angle(35, 36) - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_turn_spins_clockwise() {
        // Marker right of center; frame 1 of 4 rotates 90 degrees clockwise,
        // which carries it below the center
        let mut img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        img.put_pixel(70, 50, Rgba([255, 255, 255, 255]));

        let frames = rotation_frames(&img, 4);
        assert_eq!(frames[1].get_pixel(50, 70).0, [255, 255, 255, 255]);
        assert_eq!(frames[3].get_pixel(50, 30).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_frames_derived_independently() {
        // A half turn of a half turn would drift; frame N/2 must be the exact
        // single rotation of the source, so compare against it directly
        let img = test_image(21, 21);
        let frames = rotation_frames(&img, 2);
        let direct = rotate_about_center(&img, -180.0, ResampleFilter::Bicubic);
        assert_eq!(frames[1].as_raw(), direct.as_raw());
    }

    #[test]
    fn test_single_frame_sequence() {
        let img = test_image(10, 10);
        let frames = rotation_frames(&img, 1);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_raw(), img.as_raw());
    }
}
