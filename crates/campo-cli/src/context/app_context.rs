use anyhow::Context;
use campo_config::CampoConfig;
use campo_core::identity::AuthIdentity;
use campo_db::service::CampoService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CampoService,
    pub config: CampoConfig,
}

impl AppContext {
    /// Open the store: remote Turso when configured, else the local database file.
    pub async fn init(config: CampoConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let identity = resolve_identity(flags.user.as_deref(), &config);
        if identity.is_none() {
            tracing::debug!("no user identity configured; data commands will be rejected");
        }

        let service = if config.turso.is_configured() {
            CampoService::new_remote(&config.turso.url, &config.turso.auth_token, identity)
                .await
                .context("failed to connect to the remote campo database")?
        } else {
            let path = config.local_db_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database directory {}", parent.display())
                })?;
            }
            tracing::debug!(path = %path.display(), "opening local campo database");
            CampoService::new_local(&path.to_string_lossy(), identity)
                .await
                .context("failed to open the local campo database")?
        };

        Ok(Self { service, config })
    }

    /// `--limit`, else `general.default_limit`.
    #[must_use]
    pub fn limit(&self, flags: &GlobalFlags) -> usize {
        let limit = flags.limit.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

/// The `--user` flag wins over `auth.user_id`; blank ids mean no session.
#[must_use]
pub fn resolve_identity(flag_user: Option<&str>, config: &CampoConfig) -> Option<AuthIdentity> {
    if let Some(user) = flag_user.map(str::trim).filter(|u| !u.is_empty()) {
        return Some(AuthIdentity::new(user));
    }
    if !config.auth.is_authenticated() {
        return None;
    }
    let mut identity = AuthIdentity::new(config.auth.user_id.trim());
    if !config.auth.email.trim().is_empty() {
        identity.email = Some(config.auth.email.trim().to_string());
    }
    Some(identity)
}
