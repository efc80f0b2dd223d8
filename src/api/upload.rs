use axum::{body::Bytes, extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ingest, Session};

/// Response after an image was captured
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Width of the captured image in pixels
    pub width: usize,
    /// Height of the captured image in pixels
    pub height: usize,
}

/// Capture an image for export
///
/// The body is the raw encoded image (PNG, JPEG, GIF, BMP, ...). It replaces
/// any previously captured image. Content that is not an image is rejected
/// and leaves the current image in place.
#[utoipa::path(
    post,
    path = "/api/image",
    request_body(content = Vec<u8>, content_type = "application/octet-stream", description = "Encoded image file"),
    responses(
        (status = 200, description = "Image captured", body = UploadResponse),
        (status = 413, description = "Image exceeds the pixel limit"),
        (status = 415, description = "Body is not an image"),
        (status = 422, description = "Image could not be decoded"),
    ),
    tag = "Image"
)]
pub async fn handle_upload(
    State(session): State<Arc<RwLock<Session>>>,
    State(config): State<Arc<AppConfig>>,
    body: Bytes,
) -> Result<Json<UploadResponse>, ApiError> {
    let buffer = match ingest::from_bytes(body.to_vec(), config.max_decoded_pixels).await {
        Ok(buffer) => buffer,
        Err(e) => {
            tracing::info!(%e, bytes = body.len(), "Upload rejected, keeping current image");
            return Err(e.into());
        }
    };

    let (width, height) = (buffer.width(), buffer.height());
    session.write().await.capture(buffer);

    Ok(Json(UploadResponse {
        status: 200,
        width,
        height,
    }))
}
