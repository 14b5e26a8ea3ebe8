//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use palette_match::Catalog;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::{ApiError, LoadError};
use crate::models::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

/// Load and validate every palette the loader can see.
pub fn load_catalog(loader: &AssetLoader, config: &AppConfig) -> Result<Catalog, LoadError> {
    let catalog = Catalog::load(loader.load_palettes()?)?
        .with_suggestion_limit(config.suggestion_limit);
    tracing::info!(palettes = catalog.list_palettes().len(), "Loaded palette catalog");
    Ok(catalog)
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    let catalog = load_catalog(&asset_loader, &config)
        .map_err(|e| anyhow::anyhow!("Failed to load palettes: {e}"))?;

    Ok(AppState {
        catalog: Arc::new(catalog),
        config: Arc::new(config),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/palettes", get(handle_list_palettes))
        .route("/api/palettes/:key", get(handle_get_palette))
        .route("/api/palettes/:key/names", post(handle_resolve_names))
        .route("/api/palettes/:key/colors", post(handle_resolve_colors))
        .route("/api/convert", get(api::handle_convert))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_list_palettes(
    State(state): State<AppState>,
) -> Json<api::PaletteListResponse> {
    api::handle_list_palettes(State(state.catalog)).await
}

async fn handle_get_palette(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Json<api::PaletteResponse>, ApiError> {
    api::handle_get_palette(State(state.catalog), path).await
}

async fn handle_resolve_names(
    State(state): State<AppState>,
    path: Path<String>,
    body: Json<api::NamesRequest>,
) -> Result<Json<api::NamesResponse>, ApiError> {
    api::handle_resolve_names(State(state.catalog), path, body).await
}

async fn handle_resolve_colors(
    State(state): State<AppState>,
    path: Path<String>,
    body: Json<api::ColorsRequest>,
) -> Result<Json<api::ColorsResponse>, ApiError> {
    api::handle_resolve_colors(State(state.catalog), State(state.config), path, body).await
}
