//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use campo_config::CampoConfig;

#[test]
fn loads_turso_and_auth_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[turso]
url = "libsql://campo-test.turso.io"
auth_token = "turso-token"

[auth]
user_id = "user_2abc"
email = "fazenda@example.com"
"#,
        )?;

        let config: CampoConfig = Figment::from(Serialized::defaults(CampoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.turso.url, "libsql://campo-test.turso.io");
        assert!(config.turso.is_configured());
        assert_eq!(config.auth.user_id, "user_2abc");
        assert!(config.auth.is_authenticated());
        Ok(())
    });
}

#[test]
fn partial_satellite_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[satellite]
max_cloud_cover = 15.0
fallback_to_latest = false
"#,
        )?;

        let config: CampoConfig = Figment::from(Serialized::defaults(CampoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.satellite.max_cloud_cover - 15.0).abs() < f64::EPSILON);
        assert!(!config.satellite.fallback_to_latest);
        assert_eq!(config.satellite.collection, "sentinel-2-l2a");
        assert_eq!(config.satellite.search_limit, 10);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
bind_addr = "0.0.0.0:8080"
"#,
        )?;
        jail.set_env("CAMPO_SERVER__BIND_ADDR", "127.0.0.1:9090");

        let config: CampoConfig = Figment::from(Serialized::defaults(CampoConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("CAMPO_").split("__"))
            .extract()?;

        assert_eq!(config.server.bind_addr, "127.0.0.1:9090");
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".campo")?;
        jail.create_file(
            ".campo/config.toml",
            r#"
[geocode]
base_url = "http://localhost:8089"
"#,
        )?;

        let config = CampoConfig::load().expect("config loads");
        assert_eq!(config.geocode.base_url, "http://localhost:8089");
        Ok(())
    });
}
