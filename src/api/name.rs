use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::{last_used_name, PreferenceStore};

/// The remembered symbol name
#[derive(Debug, Serialize, ToSchema)]
pub struct NameResponse {
    /// Last name used for a code export, if any
    pub name: Option<String>,
}

/// Get the last-used symbol name
#[utoipa::path(
    get,
    path = "/api/name",
    responses(
        (status = 200, description = "Last-used name", body = NameResponse),
    ),
    tag = "Export"
)]
pub async fn handle_name(
    State(preferences): State<Arc<dyn PreferenceStore>>,
) -> Result<Json<NameResponse>, ApiError> {
    let name = last_used_name(preferences.as_ref()).await?;
    Ok(Json(NameResponse { name }))
}
