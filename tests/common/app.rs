//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use image_to_code::models::AppConfig;
use image_to_code::server::{build_router, create_app_state_with_preferences, AppState};
use image_to_code::services::{InMemoryPreferences, PreferenceStore, Session};

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub session: Arc<RwLock<Session>>,
    pub preferences: Arc<dyn PreferenceStore>,
}

impl TestApp {
    /// Create a new test application with in-memory preferences
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_preferences(config, Arc::new(InMemoryPreferences::new()))
    }

    /// Create a test application backed by the given preference store
    pub fn with_preferences(config: AppConfig, preferences: Arc<dyn PreferenceStore>) -> Self {
        let state = create_app_state_with_preferences(config, preferences);

        // Keep references for test assertions
        let session = state.session.clone();
        let preferences = state.preferences.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            session,
            preferences,
        }
    }

    /// Create a test state for custom router configuration
    pub fn create_state() -> AppState {
        create_app_state_with_preferences(
            AppConfig::default(),
            Arc::new(InMemoryPreferences::new()),
        )
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw body
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/octet-stream")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Upload an image and assert it was captured
    pub async fn upload(&self, image: Vec<u8>) -> serde_json::Value {
        let response = self.post_bytes("/api/image", image).await;
        assert_eq!(response.status, StatusCode::OK, "upload: {}", response.text());
        response.json()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
