//! # campo-config
//!
//! Layered configuration loading for Campo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CAMPO_*` prefix, `__` as separator)
//! 2. Project-level `.campo/config.toml`
//! 3. User-level `~/.config/campo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CAMPO_TURSO__URL` -> `turso.url`,
//! `CAMPO_SATELLITE__MAX_CLOUD_COVER` -> `satellite.max_cloud_cover`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use campo_config::CampoConfig;
//!
//! let config = CampoConfig::load_with_dotenv().expect("config");
//!
//! if config.turso.is_configured() {
//!     println!("Turso URL: {}", config.turso.url);
//! }
//! ```

mod auth;
mod error;
mod general;
mod geocode;
mod satellite;
mod server;
mod turso;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use geocode::GeocodeConfig;
pub use satellite::SatelliteConfig;
pub use server::ServerConfig;
pub use turso::TursoConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CampoConfig {
    #[serde(default)]
    pub turso: TursoConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub geocode: GeocodeConfig,
    #[serde(default)]
    pub satellite: SatelliteConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CampoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (or a parent) before building
    /// the figment. This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".campo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CAMPO_").split("__"))
    }

    /// Check values figment cannot check by type alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.satellite.max_cloud_cover) {
            return Err(ConfigError::InvalidValue {
                field: "satellite.max_cloud_cover".into(),
                reason: format!(
                    "must be a percentage between 0 and 100, got {}",
                    self.satellite.max_cloud_cover
                ),
            });
        }
        if self.satellite.search_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "satellite.search_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        self.bind_addr()?;
        Ok(())
    }

    /// Parsed server bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind_addr
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "server.bind_addr".into(),
                reason: format!("{e}"),
            })
    }

    /// Local database file: `turso.local_path` if set, else `<data dir>/campo/campo.db`.
    pub fn local_db_path(&self) -> PathBuf {
        if self.turso.has_local_path() {
            return PathBuf::from(&self.turso.local_path);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campo")
            .join("campo.db")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("campo").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CampoConfig::default();
        assert!(!config.turso.is_configured());
        assert!(!config.auth.is_authenticated());
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: CampoConfig = CampoConfig::figment().extract().expect("should extract defaults");
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.geocode.base_url, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn out_of_range_cloud_cover_is_rejected() {
        let mut config = CampoConfig::default();
        config.satellite.max_cloud_cover = 130.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "satellite.max_cloud_cover"));
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let mut config = CampoConfig::default();
        config.server.bind_addr = "not-an-addr".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_local_path_wins() {
        let mut config = CampoConfig::default();
        config.turso.local_path = "/tmp/campo-test.db".into();
        assert_eq!(config.local_db_path(), PathBuf::from("/tmp/campo-test.db"));
    }
}
