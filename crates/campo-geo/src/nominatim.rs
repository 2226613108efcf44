//! Nominatim geocoding client.

use campo_config::GeocodeConfig;

use crate::{error::GeoError, http::build_client, http::check_response};

/// Forwards free-text place queries to a Nominatim instance.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Build a client from the `[geocode]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying HTTP client fails to build.
    pub fn from_config(config: &GeocodeConfig) -> Result<Self, GeoError> {
        Ok(Self {
            http: build_client(&config.user_agent, config.timeout_secs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?format=json&q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Search for `query` and return Nominatim's JSON unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MissingQuery`] for a blank query, and
    /// [`GeoError::Http`], [`GeoError::Api`] or [`GeoError::Parse`] when the
    /// upstream call fails.
    pub async fn search(&self, query: &str) -> Result<serde_json::Value, GeoError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeoError::MissingQuery);
        }

        let url = self.search_url(query);
        tracing::debug!(%url, "geocode search");
        let resp = check_response(self.http.get(&url).send().await?).await?;

        resp.json()
            .await
            .map_err(|e| GeoError::Parse(format!("geocode response: {e}")))
    }
}
