//! Satellite scenes, bounding boxes, and the cloud-cover selection policy.

use std::collections::BTreeMap;

use campo_config::SatelliteConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Asset keys tried in order when resolving a scene's image URL.
pub const IMAGE_ASSET_KEYS: [&str; 3] = ["visual", "thumbnail", "rendered_preview"];

/// `[min_lng, min_lat, max_lng, max_lat]` in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", try_from = "Vec<f64>")]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Validate four coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidBbox`] for non-finite values, longitudes
    /// outside ±180, latitudes outside ±90, or a min corner that is not
    /// strictly below the max corner.
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Result<Self, GeoError> {
        let coords = [min_lng, min_lat, max_lng, max_lat];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(GeoError::InvalidBbox(
                "coordinates must be finite numbers".to_string(),
            ));
        }
        for lng in [min_lng, max_lng] {
            if !(-180.0..=180.0).contains(&lng) {
                return Err(GeoError::InvalidBbox(format!(
                    "longitude {lng} is outside [-180, 180]"
                )));
            }
        }
        for lat in [min_lat, max_lat] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(GeoError::InvalidBbox(format!(
                    "latitude {lat} is outside [-90, 90]"
                )));
            }
        }
        if min_lng >= max_lng || min_lat >= max_lat {
            return Err(GeoError::InvalidBbox(
                "min corner must be below max corner".to_string(),
            ));
        }
        Ok(Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        })
    }

    /// Parse a JSON value that must be an array of exactly four numbers.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidBbox`] for any other shape or for
    /// coordinates rejected by [`BoundingBox::new`].
    pub fn from_json(value: &serde_json::Value) -> Result<Self, GeoError> {
        let items = value.as_array().ok_or_else(|| {
            GeoError::InvalidBbox("bbox must be an array of 4 numbers".to_string())
        })?;
        let coords = items
            .iter()
            .map(serde_json::Value::as_f64)
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| GeoError::InvalidBbox("bbox must contain only numbers".to_string()))?;
        Self::try_from(coords)
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.min_lng, self.min_lat, self.max_lng, self.max_lat]
    }
}

impl TryFrom<Vec<f64>> for BoundingBox {
    type Error = GeoError;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            &[min_lng, min_lat, max_lng, max_lat] => Self::new(min_lng, min_lat, max_lng, max_lat),
            other => Err(GeoError::InvalidBbox(format!(
                "bbox must have 4 numbers, got {}",
                other.len()
            ))),
        }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_array()
    }
}

/// One imagery scene returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub datetime: DateTime<Utc>,
    /// Percentage in `[0, 100]`; `None` when the catalog does not report it.
    pub cloud_cover: Option<f64>,
    /// Asset key → href.
    pub assets: BTreeMap<String, String>,
}

impl Scene {
    /// First available image href among [`IMAGE_ASSET_KEYS`].
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        IMAGE_ASSET_KEYS
            .iter()
            .find_map(|key| self.assets.get(*key))
            .map(String::as_str)
    }
}

/// Which scene to show for an area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudPolicy {
    /// Scenes with cloud cover strictly below this value are acceptable.
    pub max_cloud_cover: f64,
    /// When nothing is acceptable, use the most recent scene instead of failing.
    pub fallback_to_latest: bool,
}

impl Default for CloudPolicy {
    fn default() -> Self {
        Self {
            max_cloud_cover: 30.0,
            fallback_to_latest: true,
        }
    }
}

impl From<&SatelliteConfig> for CloudPolicy {
    fn from(config: &SatelliteConfig) -> Self {
        Self {
            max_cloud_cover: config.max_cloud_cover,
            fallback_to_latest: config.fallback_to_latest,
        }
    }
}

impl CloudPolicy {
    /// Whether a scene passes the cloud filter. Unknown cover never passes.
    #[must_use]
    pub fn accepts(&self, scene: &Scene) -> bool {
        scene
            .cloud_cover
            .is_some_and(|cover| cover < self.max_cloud_cover)
    }

    /// Pick the most recent acceptable scene, or the most recent overall
    /// when the fallback is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NoScenes`] when `scenes` is empty, or when nothing
    /// is acceptable and the fallback is disabled.
    pub fn select<'a>(&self, scenes: &'a [Scene]) -> Result<&'a Scene, GeoError> {
        let latest = |a: &&Scene, b: &&Scene| a.datetime.cmp(&b.datetime);

        if let Some(scene) = scenes.iter().filter(|s| self.accepts(s)).max_by(latest) {
            return Ok(scene);
        }

        if !self.fallback_to_latest {
            return Err(GeoError::NoScenes);
        }

        let scene = scenes.iter().max_by(latest).ok_or(GeoError::NoScenes)?;
        tracing::warn!(
            scene_id = %scene.id,
            cloud_cover = ?scene.cloud_cover,
            max_cloud_cover = self.max_cloud_cover,
            "no scene under the cloud threshold, using the most recent scene"
        );
        Ok(scene)
    }
}

/// Normalized satellite response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteImage {
    pub image_url: String,
    pub date: DateTime<Utc>,
    pub cloud_cover: Option<f64>,
}

impl TryFrom<&Scene> for SatelliteImage {
    type Error = GeoError;

    fn try_from(scene: &Scene) -> Result<Self, Self::Error> {
        let image_url = scene.image_url().ok_or(GeoError::NoAsset)?;
        Ok(Self {
            image_url: image_url.to_string(),
            date: scene.datetime,
            cloud_cover: scene.cloud_cover,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn scene(id: &str, day: u32, cloud_cover: Option<f64>) -> Scene {
        let mut assets = BTreeMap::new();
        assets.insert("visual".to_string(), format!("https://img.test/{id}.tif"));
        Scene {
            id: id.to_string(),
            datetime: Utc.with_ymd_and_hms(2026, 3, day, 13, 0, 0).unwrap(),
            cloud_cover,
            assets,
        }
    }

    #[test]
    fn filter_keeps_clear_scenes_and_picks_most_recent() {
        let scenes = vec![
            scene("a", 1, Some(5.0)),
            scene("b", 20, Some(45.0)),
            scene("c", 10, Some(20.0)),
        ];
        let policy = CloudPolicy::default();

        let kept: Vec<&str> = scenes
            .iter()
            .filter(|s| policy.accepts(s))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(kept, vec!["a", "c"]);
        assert_eq!(policy.select(&scenes).unwrap().id, "c");
    }

    #[test]
    fn all_cloudy_falls_back_to_most_recent() {
        let scenes = vec![
            scene("a", 1, Some(30.0)),
            scene("b", 20, Some(80.0)),
            scene("c", 10, Some(55.0)),
        ];
        assert_eq!(CloudPolicy::default().select(&scenes).unwrap().id, "b");
    }

    #[test]
    fn fallback_disabled_reports_no_scenes() {
        let scenes = vec![scene("a", 1, Some(90.0))];
        let policy = CloudPolicy {
            fallback_to_latest: false,
            ..CloudPolicy::default()
        };
        assert!(matches!(policy.select(&scenes), Err(GeoError::NoScenes)));
    }

    #[test]
    fn unknown_cover_only_counts_for_fallback() {
        let scenes = vec![scene("clear", 1, Some(2.0)), scene("unknown", 25, None)];
        assert_eq!(CloudPolicy::default().select(&scenes).unwrap().id, "clear");

        let only_unknown = vec![scene("unknown", 25, None)];
        assert_eq!(
            CloudPolicy::default().select(&only_unknown).unwrap().id,
            "unknown"
        );
    }

    #[test]
    fn empty_scene_list_is_no_scenes() {
        assert!(matches!(
            CloudPolicy::default().select(&[]),
            Err(GeoError::NoScenes)
        ));
    }

    #[test]
    fn image_url_prefers_visual_then_thumbnail() {
        let mut s = scene("a", 1, Some(1.0));
        s.assets.insert("thumbnail".to_string(), "https://img.test/a.jpg".to_string());
        assert_eq!(s.image_url(), Some("https://img.test/a.tif"));

        s.assets.remove("visual");
        assert_eq!(s.image_url(), Some("https://img.test/a.jpg"));

        s.assets.clear();
        s.assets.insert("rendered_preview".to_string(), "https://img.test/p.png".to_string());
        assert_eq!(s.image_url(), Some("https://img.test/p.png"));

        s.assets.clear();
        assert!(matches!(SatelliteImage::try_from(&s), Err(GeoError::NoAsset)));
    }

    #[test]
    fn satellite_image_serializes_camel_case() {
        let image = SatelliteImage::try_from(&scene("a", 5, Some(12.5))).unwrap();
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["imageUrl"], "https://img.test/a.tif");
        assert_eq!(json["cloudCover"], 12.5);
        assert!(json["date"].as_str().unwrap().starts_with("2026-03-05T13:00:00"));
    }

    #[test]
    fn bbox_validation() {
        let ok = BoundingBox::from_json(&serde_json::json!([-47.1, -22.9, -47.0, -22.8])).unwrap();
        assert_eq!(ok.to_array(), [-47.1, -22.9, -47.0, -22.8]);

        let bad = [
            serde_json::json!([-47.1, -22.9, -47.0]),
            serde_json::json!("not an array"),
            serde_json::json!([-47.1, "x", -47.0, -22.8]),
            serde_json::json!([-181.0, -22.9, -47.0, -22.8]),
            serde_json::json!([-47.1, -91.0, -47.0, -22.8]),
            serde_json::json!([-47.0, -22.9, -47.1, -22.8]),
            serde_json::json!([-47.1, -22.8, -47.0, -22.8]),
        ];
        for value in bad {
            assert!(
                matches!(BoundingBox::from_json(&value), Err(GeoError::InvalidBbox(_))),
                "{value} should be rejected"
            );
        }
        assert!(BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn bbox_serde_as_array() {
        let bbox = BoundingBox::new(-1.0, -2.0, 3.0, 4.0).unwrap();
        assert_eq!(serde_json::to_string(&bbox).unwrap(), "[-1.0,-2.0,3.0,4.0]");
        let back: BoundingBox = serde_json::from_str("[-1.0,-2.0,3.0,4.0]").unwrap();
        assert_eq!(back, bbox);
        assert!(serde_json::from_str::<BoundingBox>("[3.0,-2.0,-1.0,4.0]").is_err());
    }
}
