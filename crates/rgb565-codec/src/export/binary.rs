//! Raw binary export.

use super::artifact::BinaryArtifact;
use crate::serialize::ByteStream;

/// File extension of binary artifacts.
pub const BINARY_EXTENSION: &str = "bin";

/// Render `stream` as a headerless binary blob named `"<name>.bin"`.
///
/// The artifact bytes are the stream bytes exactly: no magic number, no
/// length prefix. An empty stream gives a zero-length artifact.
///
/// # Example
///
/// ```
/// use rgb565_codec::{render_binary, ByteStream};
///
/// let artifact = render_binary(&ByteStream::from_bytes(vec![0x12, 0x34]), "logo");
/// assert_eq!(artifact.filename(), "logo.bin");
/// assert_eq!(artifact.bytes(), &[0x12, 0x34]);
/// ```
pub fn render_binary(stream: &ByteStream, name: &str) -> BinaryArtifact {
    BinaryArtifact::new(
        stream.as_bytes().to_vec(),
        format!("{name}.{BINARY_EXTENSION}"),
    )
}
