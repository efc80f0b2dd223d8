//! Image ingestion: turn pasted, dropped, or uploaded content into an owned
//! [`PixelBuffer`].
//!
//! Decoding is CPU-bound and runs on a blocking thread; the returned future
//! is the completion signal. Content that is not an image at all resolves to
//! [`IngestError::UnsupportedPaste`] so callers can leave their session
//! untouched.

use image::{ImageFormat, ImageReader};
use rgb565_codec::PixelBuffer;
use std::io::Cursor;
use std::path::Path;

use crate::error::IngestError;

/// Default upper bound on decoded pixels (about 40 megapixels).
pub const DEFAULT_MAX_DECODED_PIXELS: u64 = 40_000_000;

/// Decode image bytes of any supported format.
pub async fn from_bytes(bytes: Vec<u8>, max_pixels: u64) -> Result<PixelBuffer, IngestError> {
    tokio::task::spawn_blocking(move || decode(&bytes, max_pixels))
        .await
        .map_err(|e| IngestError::Decode(format!("Decode task failed: {e}")))?
}

/// Read and decode an image file.
pub async fn from_file(path: &Path, max_pixels: u64) -> Result<PixelBuffer, IngestError> {
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read image file");
    from_bytes(bytes, max_pixels).await
}

/// Take the image currently on the system clipboard.
pub async fn from_clipboard(max_pixels: u64) -> Result<PixelBuffer, IngestError> {
    tokio::task::spawn_blocking(move || read_clipboard(max_pixels))
        .await
        .map_err(|e| IngestError::Clipboard(format!("Clipboard task failed: {e}")))?
}

/// Synchronous decode used by [`from_bytes`].
///
/// The header is inspected first so oversized images are rejected before
/// any pixel memory is allocated.
pub fn decode(bytes: &[u8], max_pixels: u64) -> Result<PixelBuffer, IngestError> {
    let format: ImageFormat = image::guess_format(bytes)
        .map_err(|e| IngestError::UnsupportedPaste(format!("not a recognised image: {e}")))?;

    let (header_width, header_height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| IngestError::Decode(e.to_string()))?;
    check_pixel_limit(header_width.into(), header_height.into(), max_pixels)?;

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| IngestError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    check_pixel_limit(width.into(), height.into(), max_pixels)?;

    let buffer = PixelBuffer::new(width as usize, height as usize, rgba.into_raw())?;

    tracing::info!(?format, width, height, "Image decoded");

    Ok(buffer)
}

fn read_clipboard(max_pixels: u64) -> Result<PixelBuffer, IngestError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| IngestError::Clipboard(e.to_string()))?;

    let image = match clipboard.get_image() {
        Ok(image) => image,
        Err(arboard::Error::ContentNotAvailable) => {
            return Err(IngestError::UnsupportedPaste(
                "clipboard holds no image".to_string(),
            ))
        }
        Err(e) => return Err(IngestError::Clipboard(e.to_string())),
    };

    check_pixel_limit(dimension(image.width), dimension(image.height), max_pixels)?;
    let buffer = PixelBuffer::new(image.width, image.height, image.bytes.into_owned())?;

    tracing::info!(
        width = buffer.width(),
        height = buffer.height(),
        "Image pasted from clipboard"
    );

    Ok(buffer)
}

/// Clipboard dimensions are `usize`; anything beyond `u64` saturates.
fn dimension(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

fn check_pixel_limit(width: u64, height: u64, max_pixels: u64) -> Result<(), IngestError> {
    let pixels = width.saturating_mul(height);
    if pixels > max_pixels {
        return Err(IngestError::ResourceLimit {
            width,
            height,
            max: max_pixels,
        });
    }
    Ok(())
}
