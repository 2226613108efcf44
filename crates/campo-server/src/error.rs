//! HTTP error mapping for the proxy endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campo_geo::GeoError;
use thiserror::Error;

/// Message returned for upstream failures; the detail goes to the log only.
const UPSTREAM_FAILURE: &str = "Upstream service request failed";

/// Errors returned by request handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Malformed request body.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Geo(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Geo(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Geo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "upstream request failed");
            UPSTREAM_FAILURE.to_string()
        } else {
            self.to_string()
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Errors starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(#[from] campo_config::ConfigError),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] GeoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
