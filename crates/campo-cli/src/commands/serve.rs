use anyhow::Context;
use campo_config::CampoConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `campo serve`. Needs no database or user identity.
pub async fn handle(args: &ServeArgs, mut config: CampoConfig) -> anyhow::Result<()> {
    if let Some(bind) = &args.bind {
        config.server.bind_addr.clone_from(bind);
    }
    campo_server::serve(&config)
        .await
        .context("campo server stopped")
}
