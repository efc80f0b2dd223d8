//! Serialization of packed pixels into a byte stream.
//!
//! There is no transformation between conversion and export: the
//! [`ByteStream`] built by [`convert`](crate::convert) is handed to both
//! exporters as-is.

mod byte_stream;

pub use byte_stream::ByteStream;
