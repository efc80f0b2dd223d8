//! Export sinks for a converted [`ByteStream`](crate::ByteStream).
//!
//! Two representations are offered:
//!
//! - **Binary** ([`render_binary`]): the stream bytes as a `.bin` blob
//! - **Source** ([`render_source`]): an Arduino header declaring a
//!   `PROGMEM` byte array
//!
//! [`export`] runs the full pipeline from a [`PixelBuffer`] in one call.

mod artifact;
mod binary;
mod source;

pub use artifact::{
    BinaryArtifact, ExportArtifact, ExportFormat, SourceArtifact, BINARY_MEDIA_TYPE,
    SOURCE_MEDIA_TYPE,
};
pub use binary::{render_binary, BINARY_EXTENSION};
pub use source::{array_identifier, render_source, ARRAY_SUFFIX, SOURCE_EXTENSION};

use crate::buffer::PixelBuffer;
use crate::convert::convert;
use crate::serialize::ByteStream;

/// Render an already converted stream in the given format.
pub fn render(stream: &ByteStream, format: ExportFormat, name: &str) -> ExportArtifact {
    match format {
        ExportFormat::Binary => render_binary(stream, name).into(),
        ExportFormat::Source => render_source(stream, name).into(),
    }
}

/// Convert `buffer` and render the result in one pass.
///
/// # Example
///
/// ```
/// use rgb565_codec::{export, ExportFormat, PixelBuffer};
///
/// let buffer = PixelBuffer::new(1, 1, vec![0, 0, 0, 255]).unwrap();
/// let artifact = export(&buffer, ExportFormat::Binary, "dot");
///
/// assert_eq!(artifact.as_bytes(), &[0x00, 0x00]);
/// assert_eq!(artifact.filename(), "dot.bin");
/// ```
pub fn export(buffer: &PixelBuffer, format: ExportFormat, name: &str) -> ExportArtifact {
    render(&convert(buffer), format, name)
}
