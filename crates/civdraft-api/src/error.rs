//! Civdraft API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use civdraft_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The catalog could not be loaded or failed validation.
    #[error("catalog error: {0}")]
    Catalog(#[from] DomainError),

    /// The tracing pipeline could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Tokens that failed to resolve, for `unrecognized_civilization`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrecognized: Option<Vec<String>>,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::InvalidPlayerCount { .. } => {
                (StatusCode::BAD_REQUEST, "invalid_player_count")
            }
            DomainError::UnrecognizedCivilizations(_) => {
                (StatusCode::BAD_REQUEST, "unrecognized_civilization")
            }
            DomainError::InsufficientPool { .. } => (StatusCode::CONFLICT, "insufficient_pool"),
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let unrecognized = match &self.0 {
            DomainError::UnrecognizedCivilizations(tokens) => Some(tokens.clone()),
            _ => None,
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
            unrecognized,
        };

        (status, Json(body)).into_response()
    }
}
