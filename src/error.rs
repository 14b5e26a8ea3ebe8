use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use palette_match::{QueryError, UnsupportedMetric, ValidationError};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<UnsupportedMetric> for ApiError {
    fn from(e: UnsupportedMetric) -> Self {
        ApiError::Query(e.into())
    }
}

/// Failure to turn palette files into raw palettes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse palette file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid color {name:?} in {file}: {reason}")]
    Color {
        file: String,
        name: String,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(QueryError::UnknownPalette { .. }) => StatusCode::NOT_FOUND,
            ApiError::Query(QueryError::UnmatchedNames { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Query(QueryError::InvalidInput { .. })
            | ApiError::Query(QueryError::UnsupportedMetric(_))
            | ApiError::InvalidColor { .. }
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Structured context a client can use to correct the request.
    fn details(&self) -> Value {
        match self {
            ApiError::Query(QueryError::UnknownPalette { valid, .. }) => json!({ "valid": valid }),
            ApiError::Query(QueryError::UnmatchedNames { unmatched, .. }) => unmatched
                .iter()
                .map(|u| {
                    json!({
                        "position": u.position,
                        "query": u.query,
                        "suggestions": u.suggestions,
                    })
                })
                .collect(),
            ApiError::Query(QueryError::InvalidInput { invalid, .. }) => invalid
                .iter()
                .map(|c| json!({ "row": c.row, "column": c.column, "value": c.value }))
                .collect(),
            ApiError::Query(QueryError::UnsupportedMetric(e)) => json!({ "valid": e.valid }),
            ApiError::InvalidColor { input, .. } => json!({ "input": input }),
            ApiError::BadRequest(_) => Value::Null,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
            "details": self.details(),
        }));

        (status, body).into_response()
    }
}
