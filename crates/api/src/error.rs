//! API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use symptom_intake::ValidationError;
use thiserror::Error;

/// Errors surfaced by the service
#[derive(Debug, Error)]
pub enum ApiError {
    /// The form is missing required data
    #[error("Invalid symptom form: {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Metrics recorder could not be installed
    #[error("Metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// Socket or I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One field problem, as sent to clients
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                errors
                    .iter()
                    .map(|e| FieldError {
                        field: e.field(),
                        message: e.to_string(),
                    })
                    .collect(),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, Vec::new()),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
