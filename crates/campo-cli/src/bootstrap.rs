use anyhow::Context;
use campo_config::CampoConfig;

/// Load `.env` (if any) and the layered config.
pub fn load_config() -> anyhow::Result<CampoConfig> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            return Err(error).context("failed to load .env file");
        }
    }
    CampoConfig::load().context("failed to load campo configuration")
}
