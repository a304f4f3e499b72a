//! Gateway error taxonomy and its HTTP mapping.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::types::ErrorResponse;

/// Which request parameter named a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptRole {
    Source,
    Target,
}

impl fmt::Display for ScriptRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptRole::Source => f.write_str("source"),
            ScriptRole::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The engine never loaded, so no conversion can run.
    #[error("Vidyut library not available")]
    EngineUnavailable,

    #[error("Unsupported {role} script: {name}")]
    UnknownScript { role: ScriptRole, name: String },

    /// Lookup of a single script by name (`GET /scripts/:name`).
    #[error("Unsupported script: {0}")]
    ScriptNotFound(String),

    #[error("Transliteration failed: {0}")]
    ConversionFailed(String),

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::EngineUnavailable | GatewayError::ConversionFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::UnknownScript { .. } => StatusCode::BAD_REQUEST,
            GatewayError::ScriptNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
