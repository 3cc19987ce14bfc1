//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use boruto_core::CoreError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A page-resolution failure from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GatewayError {
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Core(CoreError::InvalidInput) => StatusCode::BAD_REQUEST,
            GatewayError::Core(CoreError::NotFound) => StatusCode::NOT_FOUND,
            GatewayError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = json!({"success": false, "message": self.to_string()});
        (self.status(), Json(body)).into_response()
    }
}
