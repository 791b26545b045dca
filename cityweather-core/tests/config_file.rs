use cityweather_core::Config;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = Config::load_from(&dir.path().join("config.toml")).expect("defaults");

    assert_eq!(cfg, Config::default());
    assert!(cfg.api_key.is_none());
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config {
        timeout_secs: 3,
        ..Config::default()
    };
    cfg.set_api_key("KEY".to_string());
    cfg.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.source_config().expect("key set").timeout_secs, 3);
}

#[test]
fn invalid_toml_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_key = [").expect("write");

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
