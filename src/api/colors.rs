use axum::{
    extract::{Path, State},
    response::Json,
    Json as JsonExtractor,
};
use palette_match::{Catalog, DistanceMetric, Srgb};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::AppConfig;

/// A color sample: `[r, g, b]` in [0, 1], or a string (`#RRGGBB`, `#RGB`, `r,g,b`)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SampleInput {
    Rgb(Vec<f64>),
    Text(String),
}

impl SampleInput {
    pub fn to_rgb(&self) -> Result<[f64; 3], ApiError> {
        match self {
            SampleInput::Rgb(values) => <[f64; 3]>::try_from(values.as_slice()).map_err(|_| {
                ApiError::BadRequest(format!(
                    "a color sample needs 3 components, got {}",
                    values.len()
                ))
            }),
            SampleInput::Text(text) => parse_sample(text),
        }
    }
}

/// Parses `#RRGGBB`, `#RGB` (hash optional) or comma-separated `r,g,b` floats.
///
/// Range checking is left to matching so that every bad component of a
/// batch is reported together.
pub fn parse_sample(text: &str) -> Result<[f64; 3], ApiError> {
    let text = text.trim();
    if text.contains(',') {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ApiError::InvalidColor {
                input: text.to_string(),
                reason: format!("expected 3 components, got {}", parts.len()),
            });
        }
        let mut rgb = [0.0; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|e| ApiError::InvalidColor {
                input: text.to_string(),
                reason: format!("{part:?}: {e}"),
            })?;
        }
        return Ok(rgb);
    }

    text.parse::<Srgb>()
        .map(Srgb::to_array)
        .map_err(|e| ApiError::InvalidColor {
            input: text.to_string(),
            reason: e.to_string(),
        })
}

/// Request body for color matching
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorsRequest {
    pub samples: Vec<SampleInput>,
    /// Metric name, e.g. `CIEDE2000`; the configured default when omitted
    #[serde(default)]
    pub metric: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColorMatchJson {
    pub index: usize,
    pub name: String,
    pub rgb: Vec<f64>,
    pub hex: String,
    /// Distance from the sample under the chosen metric
    pub distance: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColorsResponse {
    pub palette: String,
    /// Canonical name of the metric used
    pub metric: String,
    /// One match per sample, in sample order
    pub matches: Vec<ColorMatchJson>,
}

/// Match color samples
///
/// Finds the perceptually closest palette color for each sample. Ties go
/// to the entry defined first.
#[utoipa::path(
    post,
    path = "/api/palettes/{key}/colors",
    request_body = ColorsRequest,
    responses(
        (status = 200, description = "Nearest color per sample", body = ColorsResponse),
        (status = 400, description = "Invalid sample or unsupported metric"),
        (status = 404, description = "Unknown palette"),
    ),
    params(
        ("key" = String, Path, description = "Palette key"),
    ),
    tag = "Matching"
)]
pub async fn handle_resolve_colors(
    State(catalog): State<Arc<Catalog>>,
    State(config): State<Arc<AppConfig>>,
    Path(key): Path<String>,
    JsonExtractor(request): JsonExtractor<ColorsRequest>,
) -> Result<Json<ColorsResponse>, ApiError> {
    let metric = match request.metric.as_deref() {
        Some(name) => name.parse::<DistanceMetric>()?,
        None => config.metric(),
    };
    let samples = request
        .samples
        .iter()
        .map(SampleInput::to_rgb)
        .collect::<Result<Vec<_>, _>>()?;

    let palette = catalog.palette(&key)?.key().to_string();
    let matches = catalog.resolve_colors(&palette, &samples, Some(metric))?;

    tracing::debug!(
        palette = %palette,
        metric = metric.name(),
        samples = samples.len(),
        "Matched colors"
    );

    Ok(Json(ColorsResponse {
        palette,
        metric: metric.name().to_string(),
        matches: matches
            .into_iter()
            .map(|m| ColorMatchJson {
                index: m.entry.index,
                name: m.entry.name.clone(),
                rgb: m.entry.rgb.to_array().to_vec(),
                hex: m.entry.hex(),
                distance: m.distance,
            })
            .collect(),
    }))
}
