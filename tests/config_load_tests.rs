// Tests for loading configuration files from disk.
use calstore::config::Config;
use std::env;
use std::fs;

#[test]
fn test_load_from_file() {
    let dir = env::temp_dir().join(format!("calstore_test_cfg_{}", std::process::id()));
    let _ = fs::create_dir_all(&dir);
    let path = dir.join("config.toml");

    let config = Config {
        enforce_time_order: true,
        strict_recurrence: true,
        allow_overlap_by_default: true,
        log_level: "debug".to_string(),
    };
    fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.level_filter().unwrap(), log::LevelFilter::Debug);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_and_malformed_files() {
    let dir = env::temp_dir().join(format!("calstore_test_bad_cfg_{}", std::process::id()));
    let _ = fs::create_dir_all(&dir);

    let missing = dir.join("nope.toml");
    let err = Config::load(&missing).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));

    let malformed = dir.join("broken.toml");
    fs::write(&malformed, "enforce_time_order = \"yes please\"").unwrap();
    let err = Config::load(&malformed).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(err.to_string().contains("broken.toml"));

    let _ = fs::remove_dir_all(&dir);
}
