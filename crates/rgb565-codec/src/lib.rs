//! rgb565-codec: RGBA8888 to RGB565 conversion for firmware images
//!
//! This library turns a decoded image into packed 16-bit RGB565 pixels and
//! renders the result either as a raw binary blob or as an Arduino header
//! declaring a `PROGMEM` byte array.
//!
//! # Quick Start
//!
//! ```
//! use rgb565_codec::{convert, render_binary, render_source, PixelBuffer};
//!
//! let buffer = PixelBuffer::new(1, 1, vec![255, 0, 0, 255]).unwrap();
//! let stream = convert(&buffer);
//!
//! let bin = render_binary(&stream, "logo");
//! assert_eq!(bin.bytes(), &[0xF8, 0x00]);
//!
//! let header = render_source(&stream, "logo");
//! assert!(header.text().contains("const uint8_t logo_map[] PROGMEM = {"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (RGBA8888, row-major)
//!     |
//!     v
//! convert()        r5 = r >> 3, g6 = g >> 2, b5 = b >> 3, alpha dropped
//!     |
//!     v
//! ByteStream       big-endian u16 per pixel, width * height * 2 bytes
//!     |
//!     +---> render_binary()   "<name>.bin", bytes verbatim
//!     |
//!     +---> render_source()   "const uint8_t <name>_map[] PROGMEM = { ... };"
//! ```
//!
//! Every stage is pure: the same buffer always yields the same bytes, and
//! nothing is cached between calls.
//!
//! # Quantization
//!
//! Channels are truncated, not rounded. `(7, 3, 7)` packs to `0x0000`
//! exactly like black, and `(255, 255, 255)` packs to `0xFFFF`. Firmware
//! consuming these images relies on that mapping, so it must not change.

pub mod buffer;
pub mod color;
pub mod convert;
pub mod export;
pub mod serialize;


pub use buffer::{PixelBuffer, PixelBufferError};
pub use color::Rgb565;
pub use convert::convert;
pub use export::{
    export, render, render_binary, render_source, BinaryArtifact, ExportArtifact, ExportFormat,
    SourceArtifact,
};
pub use serialize::ByteStream;
