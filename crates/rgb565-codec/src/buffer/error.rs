//! Error types for pixel buffer construction.

use std::fmt;

/// Error type for [`PixelBuffer`](super::PixelBuffer) construction.
///
/// A pixel buffer whose byte length disagrees with its dimensions is
/// rejected up front so the conversion pipeline never sees one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    /// The byte length is not `width * height * 4`
    LengthMismatch {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
        /// Bytes the dimensions require
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`
    DimensionsOverflow {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelBufferError::LengthMismatch {
                width,
                height,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "pixel data for {}x{} must be {} bytes, got {}",
                    width, height, expected, actual
                )
            }
            PixelBufferError::DimensionsOverflow { width, height } => {
                write!(f, "image dimensions {}x{} overflow", width, height)
            }
        }
    }
}

impl std::error::Error for PixelBufferError {}
