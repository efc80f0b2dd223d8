//! Pixel encodings.
//!
//! [`Rgb565`] is the only output encoding; input pixels are plain
//! `[u8; 4]` RGBA8888 quadruples read from a
//! [`PixelBuffer`](crate::buffer::PixelBuffer).

mod rgb565;

pub use rgb565::Rgb565;

/// Bytes per RGBA8888 input pixel.
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Bytes per packed RGB565 output pixel.
pub const RGB565_BYTES_PER_PIXEL: usize = 2;
