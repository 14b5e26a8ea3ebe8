//! Integration tests for the palette catalog endpoints.
//!
//! Tests GET /api/palettes and GET /api/palettes/{key}

mod common;

use axum::http::StatusCode;
use common::{
    assert_api_error, assert_ok, assert_rgb, assert_status, fixtures::EMBEDDED_KEYS, TestApp,
};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_router_over_explicit_state() {
    let state = TestApp::create_state();
    assert_eq!(state.catalog.list_palettes(), EMBEDDED_KEYS.to_vec());
    assert_eq!(state.config.suggestion_limit, 5);

    let app = TestApp::with_state(state);
    assert_status(&app.get("/health").await, StatusCode::OK);
    assert_status(&app.get("/api/nowhere").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_palettes_in_natural_order() {
    let app = TestApp::new();
    let response = app.get("/api/palettes").await;

    assert_ok(&response);
    let json: Value = response.json();
    let keys: Vec<&str> = json["palettes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, EMBEDDED_KEYS.to_vec());
}

#[tokio::test]
async fn test_list_palettes_reports_size_and_license() {
    let app = TestApp::new();
    let json: Value = app.get("/api/palettes").await.json();

    let html4 = json["palettes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["key"] == "HTML4")
        .expect("HTML4 should be listed");
    assert_eq!(html4["size"], 16);
    assert_eq!(html4["license"], "Public domain");
}

#[tokio::test]
async fn test_get_palette_entries_sorted_by_name() {
    let app = TestApp::new();
    let response = app.get("/api/palettes/HTML4").await;

    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["key"], "HTML4");

    let colors = json["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 16);
    assert_eq!(colors[0]["name"], "Aqua");
    assert_eq!(colors[0]["index"], 0);
    assert_eq!(colors[0]["hex"], "#00FFFF");
    assert_rgb(&colors[0]["rgb"], [0.0, 1.0, 1.0]);
    assert_eq!(colors[15]["name"], "Yellow");
}

#[tokio::test]
async fn test_get_palette_key_is_case_insensitive() {
    let app = TestApp::new();
    let response = app.get("/api/palettes/matlab").await;

    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["key"], "MATLAB");
    assert!(json["notes"].is_string());
}

#[tokio::test]
async fn test_indexed_palette_sorted_numerically() {
    let app = TestApp::new();
    let json: Value = app.get("/api/palettes/ral").await.json();

    let names: Vec<&str> = json["colors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.first(), Some(&"1000 Green beige"));
    assert_eq!(names.last(), Some(&"9010 Pure white"));
    assert!(names.windows(2).all(|w| w[0][..4] <= w[1][..4]));
}

#[tokio::test]
async fn test_unknown_palette_lists_valid_keys() {
    let app = TestApp::new();
    let response = app.get("/api/palettes/Pantone").await;

    let json = assert_api_error(&response, StatusCode::NOT_FOUND);
    let valid: Vec<&str> = json["details"]["valid"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(valid, EMBEDDED_KEYS.to_vec());
}
