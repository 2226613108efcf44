//! Route handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use campo_geo::{BoundingBox, SatelliteImage};
use serde::Deserialize;
use serde_json::Value;

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    q: Option<String>,
}

/// `GET /api/geocode?q=<text>`: Nominatim's JSON, unmodified.
pub async fn geocode(
    State(state): State<AppState>,
    params: Result<Query<GeocodeParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = params.q.unwrap_or_default();
    Ok(Json(state.geocode.search(&query).await?))
}

/// `POST /api/satellite` with `{"bbox": [minLng, minLat, maxLng, maxLat]}`.
pub async fn satellite(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SatelliteImage>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let bbox = body
        .get("bbox")
        .map(BoundingBox::from_json)
        .ok_or_else(|| ApiError::BadRequest("Body field \"bbox\" is required".to_string()))??;
    Ok(Json(state.satellite.latest_image(&bbox).await?))
}

/// `GET /health`.
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
