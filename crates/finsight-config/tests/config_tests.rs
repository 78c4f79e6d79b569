use std::fs;

use finsight_config::{Config, ConfigError, ConfigManager};
use rust_decimal_macros::dec;
use tempfile::tempdir;

#[test]
fn default_config_matches_forecast_conventions() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "TRY");
    assert_eq!(cfg.history_months, 6);
    assert_eq!(cfg.confidence_interval, 85);
    assert_eq!(cfg.confidence_band, dec!(0.15));
    assert!(cfg.validate().is_ok());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded, Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("finsight")).expect("manager");

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.history_months = 12;
    cfg.default_store = Some(dir.path().join("snapshot.json"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "currency": "USD" }"#).expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load partial");
    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.max_months_to_project, 120);
    assert_eq!(loaded.history_months, 6);
}

#[test]
fn invalid_values_are_rejected_on_load_and_save() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "confidence_band": "1.5" }"#).expect("write config");
    let manager = ConfigManager::new(path);

    assert!(matches!(manager.load(), Err(ConfigError::Invalid(_))));

    let mut cfg = Config::default();
    cfg.history_months = 0;
    assert!(matches!(manager.save(&cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write config");

    assert!(matches!(
        ConfigManager::new(path).load(),
        Err(ConfigError::Serde(_))
    ));
}
