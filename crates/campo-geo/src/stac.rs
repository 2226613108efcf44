//! STAC catalog search client for satellite scenes.

use std::collections::BTreeMap;

use campo_config::SatelliteConfig;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::GeoError;
use crate::http::{build_client, check_response};
use crate::scenes::{BoundingBox, CloudPolicy, SatelliteImage, Scene};

const USER_AGENT: &str = "campo/0.1";

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    id: String,
    #[serde(default)]
    properties: Properties,
    #[serde(default)]
    assets: BTreeMap<String, Asset>,
}

#[derive(Deserialize, Default)]
struct Properties {
    datetime: Option<String>,
    #[serde(rename = "eo:cloud_cover")]
    cloud_cover: Option<f64>,
}

#[derive(Deserialize)]
struct Asset {
    href: String,
}

impl Feature {
    /// Features without a parseable `datetime` cannot be ordered and are dropped.
    fn into_scene(self) -> Option<Scene> {
        let raw = self.properties.datetime?;
        let datetime = match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(e) => {
                tracing::debug!(scene_id = %self.id, datetime = %raw, %e, "skipping scene with bad datetime");
                return None;
            }
        };
        Some(Scene {
            id: self.id,
            datetime,
            cloud_cover: self.properties.cloud_cover,
            assets: self
                .assets
                .into_iter()
                .map(|(key, asset)| (key, asset.href))
                .collect(),
        })
    }
}

fn parse_scenes(body: &str) -> Result<Vec<Scene>, GeoError> {
    let collection: FeatureCollection = serde_json::from_str(body)
        .map_err(|e| GeoError::Parse(format!("STAC search response: {e}")))?;
    Ok(collection
        .features
        .into_iter()
        .filter_map(Feature::into_scene)
        .collect())
}

/// Searches a STAC API and picks the scene to display for an area.
#[derive(Debug, Clone)]
pub struct SatelliteClient {
    http: reqwest::Client,
    search_url: String,
    collection: String,
    search_limit: u32,
    policy: CloudPolicy,
}

impl SatelliteClient {
    /// Build a client from the `[satellite]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying HTTP client fails to build.
    pub fn from_config(config: &SatelliteConfig) -> Result<Self, GeoError> {
        Ok(Self {
            http: build_client(USER_AGENT, config.timeout_secs)?,
            search_url: format!("{}/search", config.stac_url.trim_end_matches('/')),
            collection: config.collection.clone(),
            search_limit: config.search_limit,
            policy: CloudPolicy::from(config),
        })
    }

    #[must_use]
    pub const fn policy(&self) -> CloudPolicy {
        self.policy
    }

    /// STAC item-search body for `bbox`, newest scenes first.
    #[must_use]
    pub fn search_body(&self, bbox: &BoundingBox) -> serde_json::Value {
        serde_json::json!({
            "collections": [self.collection],
            "bbox": bbox.to_array(),
            "limit": self.search_limit,
            "sortby": [{ "field": "properties.datetime", "direction": "desc" }],
        })
    }

    /// Run the catalog search and return every dated scene.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`], [`GeoError::Api`] or [`GeoError::Parse`]
    /// when the upstream call fails.
    pub async fn search_scenes(&self, bbox: &BoundingBox) -> Result<Vec<Scene>, GeoError> {
        tracing::debug!(url = %self.search_url, ?bbox, "satellite scene search");
        let resp = self
            .http
            .post(&self.search_url)
            .json(&self.search_body(bbox))
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;
        parse_scenes(&body)
    }

    /// Search, apply the cloud policy, and normalize the chosen scene.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NoScenes`] when nothing can be selected,
    /// [`GeoError::NoAsset`] when the chosen scene has no image href, and the
    /// upstream errors of [`SatelliteClient::search_scenes`].
    pub async fn latest_image(&self, bbox: &BoundingBox) -> Result<SatelliteImage, GeoError> {
        let scenes = self.search_scenes(bbox).await?;
        let scene = self.policy.select(&scenes)?;
        SatelliteImage::try_from(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "id": "S2B_23KLP_20260310_0_L2A",
                "properties": { "datetime": "2026-03-10T13:21:05.123Z", "eo:cloud_cover": 45.2 },
                "assets": {
                    "visual": { "href": "https://img.test/0310/TCI.tif" },
                    "thumbnail": { "href": "https://img.test/0310/thumb.jpg" }
                }
            },
            {
                "id": "S2A_23KLP_20260305_0_L2A",
                "properties": { "datetime": "2026-03-05T13:21:01Z", "eo:cloud_cover": 12.0 },
                "assets": {
                    "thumbnail": { "href": "https://img.test/0305/thumb.jpg" }
                }
            },
            {
                "id": "undated",
                "properties": { "datetime": null, "eo:cloud_cover": 1.0 },
                "assets": {}
            }
        ]
    }"#;

    #[test]
    fn parse_stac_feature_collection() {
        let scenes = parse_scenes(FIXTURE).unwrap();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].id, "S2B_23KLP_20260310_0_L2A");
        assert_eq!(scenes[0].cloud_cover, Some(45.2));
        assert_eq!(scenes[0].image_url(), Some("https://img.test/0310/TCI.tif"));
        assert_eq!(scenes[1].image_url(), Some("https://img.test/0305/thumb.jpg"));
    }

    #[test]
    fn fixture_selects_clear_scene() {
        let scenes = parse_scenes(FIXTURE).unwrap();
        let scene = CloudPolicy::default().select(&scenes).unwrap();
        let image = SatelliteImage::try_from(scene).unwrap();
        assert_eq!(image.image_url, "https://img.test/0305/thumb.jpg");
        assert_eq!(image.cloud_cover, Some(12.0));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(parse_scenes("<html>"), Err(GeoError::Parse(_))));
        assert!(parse_scenes("{}").unwrap().is_empty());
    }

    #[test]
    fn search_body_shape() {
        let client = SatelliteClient::from_config(&SatelliteConfig {
            stac_url: "https://stac.test/v1/".to_string(),
            ..SatelliteConfig::default()
        })
        .unwrap();
        assert_eq!(client.search_url, "https://stac.test/v1/search");

        let bbox = BoundingBox::new(-47.1, -22.9, -47.0, -22.8).unwrap();
        let body = client.search_body(&bbox);
        assert_eq!(body["collections"], serde_json::json!(["sentinel-2-l2a"]));
        assert_eq!(body["bbox"], serde_json::json!([-47.1, -22.9, -47.0, -22.8]));
        assert_eq!(body["limit"], 10);
        assert_eq!(body["sortby"][0]["direction"], "desc");
    }
}
