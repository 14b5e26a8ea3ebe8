//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

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

/// Assert an error response carries the expected status in body and header
pub fn assert_api_error(response: &TestResponse, expected: StatusCode) -> Value {
    assert_status(response, expected);
    let json: Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(u64::from(expected.as_u16())),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected an error message");
    json
}

/// Names of the `matches` array of a names or colors response
pub fn match_names(json: &Value) -> Vec<String> {
    json["matches"]
        .as_array()
        .expect("Expected matches array")
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

/// Assert two component triples agree to three decimals
pub fn assert_rgb(actual: &Value, expected: [f64; 3]) {
    let actual: Vec<f64> = actual
        .as_array()
        .expect("Expected rgb array")
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(actual.len(), 3, "Expected 3 components, got {actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-3, "{actual:?} != {expected:?}");
    }
}
