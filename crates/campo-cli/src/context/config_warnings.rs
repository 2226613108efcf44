use campo_config::CampoConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CampoConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CampoConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.turso.is_configured() && has_single_underscore_key(&env_keys, "CAMPO_TURSO") {
        warnings.push(
            "Turso config appears default while CAMPO_TURSO* env vars exist. Use double underscores (example: CAMPO_TURSO__URL)."
                .to_string(),
        );
    }

    if !config.auth.is_authenticated() && has_single_underscore_key(&env_keys, "CAMPO_AUTH") {
        warnings.push(
            "No user id configured while CAMPO_AUTH* env vars exist. Use double underscores (example: CAMPO_AUTH__USER_ID)."
                .to_string(),
        );
    }

    if !config.turso.url.is_empty() && config.turso.auth_token.is_empty() {
        warnings.push(
            "turso.url is set but turso.auth_token is empty; using the local database instead."
                .to_string(),
        );
    }

    warnings
}

/// `CAMPO_TURSO_URL` style keys (single underscore) that figment ignores.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
