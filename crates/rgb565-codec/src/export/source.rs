//! Arduino header export.
//!
//! The layout below is consumed by existing firmware builds and must be
//! reproduced byte-for-byte:
//!
//! ```text
//! #pragma once
//!
//! #include <Arduino.h>
//! #include <pgmspace.h>
//!
//! const uint8_t <name>_map[] PROGMEM = {
//!     0xaa, 0xbb, ...
//!   };
//! ```

use super::artifact::SourceArtifact;
use crate::serialize::ByteStream;

/// Suffix appended to the user-chosen name to form the array identifier.
pub const ARRAY_SUFFIX: &str = "_map";

/// File extension used when a source artifact is written to disk.
pub const SOURCE_EXTENSION: &str = "h";

const PREAMBLE: &str = "#pragma once\n\n#include <Arduino.h>\n#include <pgmspace.h>\n\n";
const ELEMENT_INDENT: &str = "    ";
const CLOSING: &str = "\n  };\n";
const SEPARATOR: &str = ", ";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Array identifier for `name` (`"<name>_map"`), substituted verbatim.
pub fn array_identifier(name: &str) -> String {
    format!("{name}{ARRAY_SUFFIX}")
}

/// Render `stream` as a `PROGMEM` byte array declaration.
///
/// Every byte becomes a lowercase, zero-padded `0x..` literal, joined by
/// `", "` in stream order. `name` is not sanitized. An empty stream leaves
/// the element line holding only its indentation.
///
/// # Example
///
/// ```
/// use rgb565_codec::{render_source, ByteStream};
///
/// let artifact = render_source(&ByteStream::from_bytes(vec![0x12, 0x34]), "foo");
/// assert!(artifact.text().contains("const uint8_t foo_map[] PROGMEM = {"));
/// assert!(artifact.text().contains("0x12, 0x34"));
/// ```
pub fn render_source(stream: &ByteStream, name: &str) -> SourceArtifact {
    let bytes = stream.as_bytes();
    // "0x" + 2 digits + ", " per byte
    let mut text = String::with_capacity(PREAMBLE.len() + name.len() + 64 + bytes.len() * 6);

    text.push_str(PREAMBLE);
    text.push_str("const uint8_t ");
    text.push_str(&array_identifier(name));
    text.push_str("[] PROGMEM = {\n");
    text.push_str(ELEMENT_INDENT);

    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            text.push_str(SEPARATOR);
        }
        push_hex_literal(&mut text, byte);
    }

    text.push_str(CLOSING);

    SourceArtifact::new(
        text,
        name.to_string(),
        format!("{name}.{SOURCE_EXTENSION}"),
    )
}

#[inline]
fn push_hex_literal(out: &mut String, byte: u8) {
    out.push('0');
    out.push('x');
    out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
}
