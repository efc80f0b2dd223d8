//! Input pixel buffers.

mod error;
mod pixel_buffer;

pub use error::PixelBufferError;
pub use pixel_buffer::PixelBuffer;
