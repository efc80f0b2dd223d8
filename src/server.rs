//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{FilePreferences, InMemoryPreferences, PreferenceStore, Session};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub config: Arc<AppConfig>,
}

/// Create application state from configuration.
///
/// Preferences persist to `config.state_file` when set, otherwise they
/// live in memory for the lifetime of the server.
pub fn create_app_state(config: AppConfig) -> AppState {
    let preferences: Arc<dyn PreferenceStore> = match &config.state_file {
        Some(path) => Arc::new(FilePreferences::new(path)),
        None => Arc::new(InMemoryPreferences::new()),
    };
    create_app_state_with_preferences(config, preferences)
}

/// Create application state with an explicit preference store.
pub fn create_app_state_with_preferences(
    config: AppConfig,
    preferences: Arc<dyn PreferenceStore>,
) -> AppState {
    AppState {
        session: Arc::new(RwLock::new(Session::new())),
        preferences,
        config: Arc::new(config),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/api/image", post(handle_upload))
        .route("/api/export/bin", get(handle_export_bin))
        .route("/api/export/code", get(handle_export_code))
        .route("/api/name", get(handle_name))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_upload(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::body::Bytes,
) -> Result<axum::Json<api::UploadResponse>, ApiError> {
    api::handle_upload(
        axum::extract::State(state.session),
        axum::extract::State(state.config),
        body,
    )
    .await
}

async fn handle_export_bin(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::ExportQuery>,
) -> Result<axum::response::Response, ApiError> {
    api::handle_export_bin(
        axum::extract::State(state.session),
        axum::extract::State(state.preferences),
        query,
    )
    .await
}

async fn handle_export_code(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::ExportQuery>,
) -> Result<axum::response::Response, ApiError> {
    api::handle_export_code(
        axum::extract::State(state.session),
        axum::extract::State(state.preferences),
        query,
    )
    .await
}

async fn handle_name(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<axum::Json<api::NameResponse>, ApiError> {
    api::handle_name(axum::extract::State(state.preferences)).await
}
