use axum::{extract::Query, response::Json};
use palette_match::{ColorReport, Srgb};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::colors::parse_sample;
use crate::error::ApiError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// `#RRGGBB`, `#RGB` or `r,g,b` in [0, 1]
    pub color: String,
}

/// A color in every supported space
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub hex: String,
    pub srgb: [f64; 3],
    pub linear_rgb: [f64; 3],
    pub xyz: [f64; 3],
    pub lab: [f64; 3],
    pub lch: [f64; 3],
    pub oklab: [f64; 3],
    pub din99: [f64; 3],
    pub hsv: [f64; 3],
}

impl From<ColorReport> for ConvertResponse {
    fn from(report: ColorReport) -> Self {
        Self {
            hex: report.srgb.to_hex(),
            srgb: report.srgb.to_array(),
            linear_rgb: report.linear.to_array(),
            xyz: report.xyz.to_array(),
            lab: report.lab.to_array(),
            lch: report.lch.to_array(),
            oklab: report.oklab.to_array(),
            din99: report.din99.to_array(),
            hsv: report.hsv.to_array(),
        }
    }
}

/// Convert a color
///
/// Reports one sRGB color in every color space used for matching.
#[utoipa::path(
    get,
    path = "/api/convert",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Color in every space", body = ConvertResponse),
        (status = 400, description = "Unparseable or out-of-range color"),
    ),
    tag = "Colors"
)]
pub async fn handle_convert(
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let rgb = parse_sample(&query.color)?;
    if let Some(value) = rgb.iter().find(|v| !(0.0..=1.0).contains(*v)) {
        return Err(ApiError::InvalidColor {
            input: query.color,
            reason: format!("component {value} is outside [0, 1]"),
        });
    }

    Ok(Json(ColorReport::from(Srgb::from(rgb)).into()))
}
