use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rgb565_codec::PixelBufferError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Image too large: {0}")]
    ImageTooLarge(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<IngestError> for ApiError {
    fn from(e: IngestError) -> Self {
        match &e {
            IngestError::UnsupportedPaste(_) => ApiError::UnsupportedImage(e.to_string()),
            IngestError::ResourceLimit { .. } => ApiError::ImageTooLarge(e.to_string()),
            IngestError::Decode(_) | IngestError::PixelBuffer(_) => ApiError::Decode(e.to_string()),
            IngestError::Clipboard(_) | IngestError::Io(_) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Failure to turn incoming content into a pixel buffer.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The content is not an image; the session is left untouched.
    #[error("Unsupported paste: {0}")]
    UnsupportedPaste(String),

    #[error("Image decode failed: {0}")]
    Decode(String),

    #[error("Image too large: {width}x{height} pixels (max {max} pixels)")]
    ResourceLimit { width: u64, height: u64, max: u64 },

    #[error("Invalid pixel data: {0}")]
    PixelBuffer(#[from] PixelBufferError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Whether the content was simply not an image.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, IngestError::UnsupportedPaste(_))
    }
}

/// Failure of the host environment to accept an artifact.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("{sink} sink does not accept {format} artifacts")]
    Unsupported {
        sink: &'static str,
        format: &'static str,
    },
}

/// Failure of a one-shot export run from the command line.
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnsupportedImage(_) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, self.to_string()),
            ApiError::ImageTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            ApiError::Decode(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::Preference(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
