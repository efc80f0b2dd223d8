//! RGBA8888 to RGB565 conversion.

use crate::buffer::PixelBuffer;
use crate::color::Rgb565;
use crate::serialize::ByteStream;

/// Quantize every pixel of `buffer` into a big-endian RGB565 [`ByteStream`].
///
/// Pixels are visited in row-major order; alpha is discarded and the low
/// bits of each channel are truncated. The output always holds
/// `width * height * 2` bytes and converting the same buffer twice yields
/// identical streams.
///
/// # Example
///
/// ```
/// use rgb565_codec::{convert, PixelBuffer};
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 255, 255, 255, 255, 0, 0, 255]).unwrap();
/// let stream = convert(&buffer);
///
/// assert_eq!(stream.as_bytes(), &[0xFF, 0xFF, 0xF8, 0x00]);
/// ```
pub fn convert(buffer: &PixelBuffer) -> ByteStream {
    buffer.pixels().map(Rgb565::from_rgba).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(r: u8, g: u8, b: u8, a: u8) -> PixelBuffer {
        PixelBuffer::new(1, 1, vec![r, g, b, a]).unwrap()
    }

    #[test]
    fn test_white_pixel() {
        assert_eq!(convert(&single(255, 255, 255, 255)).as_bytes(), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_black_pixel() {
        assert_eq!(convert(&single(0, 0, 0, 255)).as_bytes(), &[0x00, 0x00]);
    }

    #[test]
    fn test_red_pixel() {
        assert_eq!(convert(&single(255, 0, 0, 255)).as_bytes(), &[0xF8, 0x00]);
    }

    #[test]
    fn test_transparent_pixel_keeps_color() {
        assert_eq!(convert(&single(255, 0, 0, 0)).as_bytes(), &[0xF8, 0x00]);
    }

    #[test]
    fn test_output_length_matches_dimensions() {
        let buffer = PixelBuffer::new(5, 3, vec![0x7F; 5 * 3 * 4]).unwrap();
        assert_eq!(convert(&buffer).len(), 5 * 3 * 2);
    }

    #[test]
    fn test_row_major_order() {
        // 2x2: red, green / blue, white
        let data = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        let buffer = PixelBuffer::new(2, 2, data).unwrap();
        assert_eq!(
            convert(&buffer).as_bytes(),
            &[0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_empty_buffer() {
        assert!(convert(&PixelBuffer::empty()).is_empty());
        let zero_height = PixelBuffer::new(7, 0, Vec::new()).unwrap();
        assert!(convert(&zero_height).is_empty());
    }
}
