//! The canonical intermediate consumed by both exporters.

use crate::color::{Rgb565, RGB565_BYTES_PER_PIXEL};

/// Packed RGB565 pixels, each encoded big-endian (high byte first).
///
/// A stream produced by [`convert`](crate::convert) always holds exactly
/// `width * height * 2` bytes. Both the binary and the source exporter read
/// this stream unmodified.
///
/// # Example
///
/// ```
/// use rgb565_codec::{ByteStream, Rgb565};
///
/// let mut stream = ByteStream::with_capacity(2);
/// stream.push(Rgb565::from_rgb(255, 0, 0));
/// stream.push(Rgb565::from_rgb(0, 0, 255));
///
/// assert_eq!(stream.as_bytes(), &[0xF8, 0x00, 0x00, 0x1F]);
/// assert_eq!(stream.pixel_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteStream {
    bytes: Vec<u8>,
}

impl ByteStream {
    /// An empty stream with room for `pixels` packed pixels.
    pub fn with_capacity(pixels: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(pixels.saturating_mul(RGB565_BYTES_PER_PIXEL)),
        }
    }

    /// Adopt bytes that are already big-endian RGB565.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Append one pixel, high byte first.
    #[inline]
    pub fn push(&mut self, pixel: Rgb565) {
        self.bytes.extend_from_slice(&pixel.to_be_bytes());
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of whole pixels in the stream.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.bytes.len() / RGB565_BYTES_PER_PIXEL
    }

    /// Read the stream back as packed pixels.
    ///
    /// A trailing odd byte (only possible for streams built with
    /// [`from_bytes`](Self::from_bytes)) is not a pixel and is skipped.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Rgb565> + '_ {
        self.bytes
            .chunks_exact(RGB565_BYTES_PER_PIXEL)
            .map(|pair| Rgb565::from_be_bytes([pair[0], pair[1]]))
    }
}

impl AsRef<[u8]> for ByteStream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<ByteStream> for Vec<u8> {
    fn from(stream: ByteStream) -> Self {
        stream.bytes
    }
}

impl FromIterator<Rgb565> for ByteStream {
    fn from_iter<I: IntoIterator<Item = Rgb565>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut stream = Self::with_capacity(iter.size_hint().0);
        for pixel in iter {
            stream.push(pixel);
        }
        stream
    }
}
