use serial_test::serial;
use stagehand_config::{load_config, ConfigError, ConfigProvider};
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    for var in ["GEMINI_API_KEY", "STAGEHAND_AI__API_KEY", "STAGEHAND_LOGGING__LEVEL"] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_discovers_current_directory() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".stagehand");
    fs::create_dir(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[artist]
name = "Luna Vega"
style = "dream pop"

[ai]
model = "gemini-2.5-pro"
timeout_secs = 60
"#,
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let result = load_config();
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.artist.name, "Luna Vega");
    assert_eq!(config.artist.style, "dream pop");
    assert_eq!(config.ai.model, "gemini-2.5-pro");
    assert_eq!(config.ai.timeout_secs, 60);
}

#[test]
#[serial]
fn test_redacted_config_hides_the_key() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    env::set_var("STAGEHAND_AI__API_KEY", "AIzaSyExampleKey1234");

    let result = ConfigProvider::with_base_dir(temp_dir.path()).load();
    clear_env();
    let config = result.unwrap();

    let printed = serde_json::to_string(&config.redacted()).unwrap();
    assert!(!printed.contains("AIzaSyExampleKey"));
    assert!(printed.contains("1234"));
    assert_eq!(config.ai.api_key.as_deref(), Some("AIzaSyExampleKey1234"));
}

#[test]
#[serial]
fn test_malformed_file_is_a_parse_error() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("stagehand.toml"), "[calendar\nwindow_days = ").unwrap();

    let result = ConfigProvider::with_base_dir(temp_dir.path()).load();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
#[serial]
fn test_unknown_log_level_is_rejected() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    env::set_var("STAGEHAND_LOGGING__LEVEL", "loud");

    let result = ConfigProvider::with_base_dir(temp_dir.path()).load();
    clear_env();

    match result {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "logging.level"),
        other => panic!("expected an invalid value, got {other:?}"),
    }
}
