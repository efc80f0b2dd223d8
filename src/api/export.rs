use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rgb565_codec::{ExportArtifact, ExportFormat};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::services::{resolve_name, PreferenceStore, Session, LAST_NAME_KEY};

/// Query parameters for export endpoints
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Symbol name; defaults to the last-used name
    #[serde(default)]
    pub name: Option<String>,
}

/// Download the captured image as raw RGB565
///
/// Big-endian 16-bit pixels, row-major, no header. Returns 204 when no
/// image has been captured yet.
#[utoipa::path(
    get,
    path = "/api/export/bin",
    params(
        ("name" = Option<String>, Query, description = "Symbol name (file is <name>.bin)"),
    ),
    responses(
        (status = 200, description = "RGB565 data", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 204, description = "No image captured"),
    ),
    tag = "Export"
)]
pub async fn handle_export_bin(
    State(session): State<Arc<RwLock<Session>>>,
    State(preferences): State<Arc<dyn PreferenceStore>>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let name = resolve_name(preferences.as_ref(), query.name, None).await?;

    let Some(artifact) = render_snapshot(&session, ExportFormat::Binary, name).await? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    Ok((
        [
            (header::CONTENT_TYPE, artifact.media_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(artifact.filename()),
            ),
        ],
        artifact.into_bytes(),
    )
        .into_response())
}

/// Get the captured image as an Arduino header
///
/// Declares `const uint8_t <name>_map[] PROGMEM`. The name is remembered as
/// the last-used name. Returns 204 when no image has been captured yet.
#[utoipa::path(
    get,
    path = "/api/export/code",
    params(
        ("name" = Option<String>, Query, description = "Symbol name (array is <name>_map)"),
    ),
    responses(
        (status = 200, description = "Header source", body = String, content_type = "text/plain"),
        (status = 204, description = "No image captured"),
    ),
    tag = "Export"
)]
pub async fn handle_export_code(
    State(session): State<Arc<RwLock<Session>>>,
    State(preferences): State<Arc<dyn PreferenceStore>>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let name = resolve_name(preferences.as_ref(), query.name, None).await?;

    let Some(artifact) = render_snapshot(&session, ExportFormat::Source, name.clone()).await?
    else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    preferences.set(LAST_NAME_KEY, &name).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string())],
        artifact.into_bytes(),
    )
        .into_response())
}

/// Render the current image off the async runtime.
///
/// Only a snapshot handle is taken under the lock, so a concurrent upload
/// never waits for a long conversion.
async fn render_snapshot(
    session: &RwLock<Session>,
    format: ExportFormat,
    name: String,
) -> Result<Option<ExportArtifact>, ApiError> {
    let Some(buffer) = session.read().await.snapshot() else {
        tracing::debug!(format = format.as_str(), "Export ignored: no image captured");
        return Ok(None);
    };

    let artifact = tokio::task::spawn_blocking(move || rgb565_codec::export(&buffer, format, &name))
        .await
        .map_err(|e| ApiError::Internal(format!("Export task failed: {e}")))?;

    tracing::info!(
        format = format.as_str(),
        bytes = artifact.as_bytes().len(),
        "Export served"
    );

    Ok(Some(artifact))
}

/// `attachment; filename="..."` with characters that would break the
/// quoted string replaced.
pub fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
