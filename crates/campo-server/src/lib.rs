//! # campo-server
//!
//! axum HTTP surface for the two upstream proxies and a health probe.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use campo_config::CampoConfig;
use campo_geo::{GeocodeClient, SatelliteClient};

pub use error::{ApiError, ServerError};

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    pub geocode: Arc<GeocodeClient>,
    pub satellite: Arc<SatelliteClient>,
}

impl AppState {
    /// Build both upstream clients from config.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Client`] if an HTTP client fails to build.
    pub fn from_config(config: &CampoConfig) -> Result<Self, ServerError> {
        Ok(Self {
            geocode: Arc::new(GeocodeClient::from_config(&config.geocode)?),
            satellite: Arc::new(SatelliteClient::from_config(&config.satellite)?),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/geocode", get(handlers::geocode))
        .route("/api/satellite", post(handlers::satellite))
        .with_state(state)
}

/// Bind `server.bind_addr` and serve until the process is stopped.
///
/// # Errors
///
/// Returns [`ServerError`] for an unparseable bind address, a client build
/// failure, or a socket error.
pub async fn serve(config: &CampoConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr()?;
    let app = build_router(AppState::from_config(config)?);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "campo server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
