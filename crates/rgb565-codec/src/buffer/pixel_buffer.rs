//! Immutable RGBA8888 image input.

use super::error::PixelBufferError;
use crate::color::RGBA_BYTES_PER_PIXEL;

/// A decoded image as interleaved RGBA8888 bytes.
///
/// Rows are stored top-to-bottom, pixels left-to-right, four bytes per
/// pixel in `R, G, B, A` order. The byte length always equals
/// `width * height * 4`; [`PixelBuffer::new`] refuses anything else.
///
/// A zero width or height is accepted and describes an empty image.
///
/// # Example
///
/// ```
/// use rgb565_codec::PixelBuffer;
///
/// let buffer = PixelBuffer::new(1, 1, vec![255, 0, 0, 255]).unwrap();
/// assert_eq!(buffer.pixel_count(), 1);
///
/// assert!(PixelBuffer::new(2, 2, vec![0; 4]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap RGBA8888 bytes, validating the length against the dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(RGBA_BYTES_PER_PIXEL))
            .ok_or(PixelBufferError::DimensionsOverflow { width, height })?;

        if data.len() != expected {
            return Err(PixelBufferError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// An image with no pixels.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / RGBA_BYTES_PER_PIXEL
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(RGBA_BYTES_PER_PIXEL)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::empty()
    }
}
