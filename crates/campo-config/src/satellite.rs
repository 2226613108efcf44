//! Satellite imagery upstream (STAC search) configuration.

use serde::{Deserialize, Serialize};

fn default_stac_url() -> String {
    "https://earth-search.aws.element84.com/v1".to_string()
}

fn default_collection() -> String {
    "sentinel-2-l2a".to_string()
}

const fn default_max_cloud_cover() -> f64 {
    30.0
}

const fn default_fallback_to_latest() -> bool {
    true
}

const fn default_search_limit() -> u32 {
    10
}

const fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SatelliteConfig {
    /// STAC API root; searches go to `{stac_url}/search`.
    #[serde(default = "default_stac_url")]
    pub stac_url: String,

    #[serde(default = "default_collection")]
    pub collection: String,

    /// Scenes with cloud cover strictly below this percentage are acceptable.
    #[serde(default = "default_max_cloud_cover")]
    pub max_cloud_cover: f64,

    /// Use the most recent scene when none is under the cloud threshold.
    #[serde(default = "default_fallback_to_latest")]
    pub fallback_to_latest: bool,

    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            stac_url: default_stac_url(),
            collection: default_collection(),
            max_cloud_cover: default_max_cloud_cover(),
            fallback_to_latest: default_fallback_to_latest(),
            search_limit: default_search_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
