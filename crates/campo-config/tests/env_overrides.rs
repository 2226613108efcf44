use figment::Jail;
use campo_config::{CampoConfig, ConfigError};

#[test]
fn env_fills_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPO_AUTH__USER_ID", "user_from_env");
        jail.set_env("CAMPO_SATELLITE__MAX_CLOUD_COVER", "25.0");
        jail.set_env("CAMPO_GENERAL__DEFAULT_LIMIT", "5");

        let config = CampoConfig::load().expect("config loads");
        assert_eq!(config.auth.user_id, "user_from_env");
        assert!((config.satellite.max_cloud_cover - 25.0).abs() < f64::EPSILON);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn invalid_env_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPO_SATELLITE__MAX_CLOUD_COVER", "150.0");

        let err = CampoConfig::load().expect_err("150% cloud cover is invalid");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn mistyped_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPO_GENERAL__DEFAULT_LIMIT", "lots");

        let err = CampoConfig::load().expect_err("non-numeric limit");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
