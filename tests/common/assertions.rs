//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an export was ignored because nothing was captured
pub fn assert_no_content(response: &TestResponse) {
    assert_status(response, StatusCode::NO_CONTENT);
    assert!(
        response.body.is_empty(),
        "Expected empty body, got {} bytes",
        response.body.len()
    );
}

/// Assert JSON error body carries the expected status
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert!(
        json["error"].as_str().is_some_and(|e| !e.is_empty()),
        "Expected error message, got {json}"
    );
}

/// Assert a binary export response and return its bytes
pub fn assert_binary_export(response: &TestResponse, expected_filename: &str) -> Vec<u8> {
    assert_ok(response);
    assert_eq!(response.header("content-type"), Some("application/octet-stream"));
    assert_eq!(
        response.header("content-disposition").map(str::to_string),
        Some(format!("attachment; filename=\"{expected_filename}\""))
    );
    response.body.clone()
}

/// Assert a header export response and return its text
pub fn assert_source_export(response: &TestResponse, expected_array: &str) -> String {
    assert_ok(response);
    assert_eq!(
        response.header("content-type"),
        Some("text/plain; charset=utf-8")
    );
    let text = response.text();
    assert!(text.starts_with("#pragma once\n"), "Unexpected header:\n{text}");
    assert!(
        text.contains(&format!("const uint8_t {expected_array}[] PROGMEM = {{")),
        "Missing array {expected_array}:\n{text}"
    );
    text
}
