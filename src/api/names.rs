use axum::{
    extract::{Path, State},
    response::Json,
    Json as JsonExtractor,
};
use palette_match::Catalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::palettes::EntryJson;
use crate::error::ApiError;

/// Request body for name resolution
#[derive(Debug, Deserialize, ToSchema)]
pub struct NamesRequest {
    /// Color names as a user might type them
    pub queries: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NamesResponse {
    /// Canonical palette key
    pub palette: String,
    /// One entry per query, in query order
    pub matches: Vec<EntryJson>,
}

/// Resolve color names
///
/// Each query is matched by alias, then by spelling-tolerant pattern, then
/// by edit distance. If any query cannot be matched the whole request fails
/// with 422 and lists every unmatched query with suggestions.
#[utoipa::path(
    post,
    path = "/api/palettes/{key}/names",
    request_body = NamesRequest,
    responses(
        (status = 200, description = "Every query resolved", body = NamesResponse),
        (status = 404, description = "Unknown palette"),
        (status = 422, description = "Some queries matched no color"),
    ),
    params(
        ("key" = String, Path, description = "Palette key"),
    ),
    tag = "Matching"
)]
pub async fn handle_resolve_names(
    State(catalog): State<Arc<Catalog>>,
    Path(key): Path<String>,
    JsonExtractor(request): JsonExtractor<NamesRequest>,
) -> Result<Json<NamesResponse>, ApiError> {
    let palette = catalog.palette(&key)?.key().to_string();
    let entries = catalog.resolve_names(&palette, &request.queries)?;

    tracing::debug!(palette = %palette, queries = request.queries.len(), "Resolved names");

    Ok(Json(NamesResponse {
        palette,
        matches: entries.into_iter().map(EntryJson::from).collect(),
    }))
}
