use axum::{
    extract::{Path, State},
    response::Json,
};
use palette_match::{Catalog, ColorEntry, PaletteRecord};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;

/// One palette entry as reported by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct EntryJson {
    /// Position in the palette, zero-based
    pub index: usize,
    pub name: String,
    /// sRGB components in [0, 1]
    pub rgb: Vec<f64>,
    /// `#RRGGBB`
    pub hex: String,
}

impl From<&ColorEntry> for EntryJson {
    fn from(entry: &ColorEntry) -> Self {
        Self {
            index: entry.index,
            name: entry.name.clone(),
            rgb: entry.rgb.to_array().to_vec(),
            hex: entry.hex(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteSummary {
    pub key: String,
    /// Number of colors
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<&PaletteRecord> for PaletteSummary {
    fn from(palette: &PaletteRecord) -> Self {
        Self {
            key: palette.key().to_string(),
            size: palette.len(),
            license: palette.metadata().license.clone(),
            source: palette.metadata().source.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteListResponse {
    pub palettes: Vec<PaletteSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub colors: Vec<EntryJson>,
}

/// List palettes
///
/// Palettes are returned in natural order of their keys.
#[utoipa::path(
    get,
    path = "/api/palettes",
    responses(
        (status = 200, description = "Available palettes", body = PaletteListResponse),
    ),
    tag = "Palettes"
)]
pub async fn handle_list_palettes(State(catalog): State<Arc<Catalog>>) -> Json<PaletteListResponse> {
    Json(PaletteListResponse {
        palettes: catalog.palettes().map(PaletteSummary::from).collect(),
    })
}

/// Get a palette
///
/// Returns every color of the palette in its defined order. The key is
/// matched case-insensitively.
#[utoipa::path(
    get,
    path = "/api/palettes/{key}",
    responses(
        (status = 200, description = "Palette colors", body = PaletteResponse),
        (status = 404, description = "Unknown palette"),
    ),
    params(
        ("key" = String, Path, description = "Palette key, e.g. HTML4"),
    ),
    tag = "Palettes"
)]
pub async fn handle_get_palette(
    State(catalog): State<Arc<Catalog>>,
    Path(key): Path<String>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let palette = catalog.palette(&key)?;
    let metadata = palette.metadata();

    Ok(Json(PaletteResponse {
        key: palette.key().to_string(),
        license: metadata.license.clone(),
        source: metadata.source.clone(),
        notes: metadata.notes.clone(),
        colors: palette.entries().iter().map(EntryJson::from).collect(),
    }))
}
