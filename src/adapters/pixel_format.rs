//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use std::error::Error;
use std::fmt;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialPixel { src_len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialPixel { src_len } => {
                write!(f, "RGB source length {} is not a multiple of 3", src_len)
            }
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "RGBA destination length {} does not match expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Length of an RGBA buffer holding the same pixels as an RGB buffer of `rgb_len` bytes.
#[must_use]
pub const fn rgba_len_for(rgb_len: usize) -> usize {
    (rgb_len / BYTES_PER_PIXEL) * RGBA_BYTES_PER_PIXEL
}

/// Copies packed RGB pixels into an RGBA frame with opaque alpha.
///
/// Nothing is written unless both buffers describe the same number of pixels.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % BYTES_PER_PIXEL != 0 {
        return Err(PixelFormatError::PartialPixel { src_len: src.len() });
    }

    let expected = rgba_len_for(src.len());
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

/// Paints every RGBA pixel opaque black.
pub fn clear_rgba(dst: &mut [u8]) {
    for rgba in dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
        rgba.copy_from_slice(&[0, 0, 0, u8::MAX]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
        ];
        let mut dst = vec![0; rgba_len_for(src.len())];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        assert_eq!(copy_rgb_to_rgba(&[], &mut dst), Ok(()));
    }

    #[test]
    fn test_partial_pixel_is_rejected() {
        let mut dst = vec![0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::PartialPixel { src_len: 4 })
        );
    }

    #[test]
    fn test_mismatched_destination_is_left_untouched() {
        let mut dst = vec![7; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst),
            Err(PixelFormatError::LengthMismatch {
                expected: 8,
                actual: 4
            })
        );
        assert_eq!(dst, vec![7; 4]);
    }

    #[test]
    fn test_clear_rgba() {
        let mut dst = vec![9; 8];

        clear_rgba(&mut dst);

        assert_eq!(dst, vec![0, 0, 0, 255, 0, 0, 0, 255]);
    }
}
