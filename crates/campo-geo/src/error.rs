//! Upstream proxy error types.

use thiserror::Error;

/// Errors from the geocoding and satellite clients.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The free-text geocode query was missing or blank.
    #[error("Query parameter \"q\" is required")]
    MissingQuery,

    /// The bounding box is not four finite, in-range, ordered coordinates.
    #[error("Invalid bbox: {0}")]
    InvalidBbox(String),

    /// The satellite search returned no usable scene.
    #[error("No satellite scenes found for this area")]
    NoScenes,

    /// The selected scene has no image asset.
    #[error("Selected scene has no image URL")]
    NoAsset,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the upstream service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse an upstream response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GeoError {
    /// Whether the caller sent bad input (as opposed to an upstream failure).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingQuery | Self::InvalidBbox(_))
    }

    /// Whether the request was fine but nothing usable was found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NoScenes | Self::NoAsset)
    }
}
