use quickmem::config::{Config, ConfigError, ConfigStore};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
    assert!(config.api.api_key.is_none());
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.email.base_url, "https://api.reacher.email");
    assert!(config.session.path.is_none());
    assert!(config.session.resolved_path().ends_with("quickmem/session.toml"));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("quickmem/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_rejects_non_http_base_url() {
    let mut config = Config::default();
    config.api.base_url = "ftp://quickmem.example.com".to_string();

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("api.base_url"), "got: {message}");
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[api]
base_url = "https://quickmem.example.com/api"
api_key = "anon-key"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.api.base_url, "https://quickmem.example.com/api");
    assert_eq!(config.api.api_key.as_deref(), Some("anon-key"));
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.email.base_url, "https://api.reacher.email");
}

#[test]
fn test_session_path_override() {
    let file = write_config(
        r#"
[session]
path = "/tmp/quickmem-test/session.toml"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert!(config
        .session
        .resolved_path()
        .ends_with("quickmem-test/session.toml"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let file = write_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_invalid_values_fail_on_load() {
    let file = write_config(
        r#"
[email]
base_url = "reacher"
"#,
    );
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

// -- ConfigStore ---

#[test]
fn test_store_reload_replaces_config() {
    let mut file = write_config("[api]\ntimeout_seconds = 10\n");
    let store = ConfigStore::open(file.path().to_path_buf()).unwrap();
    assert_eq!(store.get().api.timeout_seconds, 10);

    file.as_file_mut().set_len(0).unwrap();
    std::fs::write(file.path(), "[api]\ntimeout_seconds = 20\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().api.timeout_seconds, 20);
}

#[test]
fn test_store_reload_failure_keeps_old_config() {
    let file = write_config("[api]\ntimeout_seconds = 10\n");
    let store = ConfigStore::open(file.path().to_path_buf()).unwrap();

    std::fs::write(file.path(), "[api]\ntimeout_seconds = 0\n").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().api.timeout_seconds, 10);
    assert_eq!(store.path(), file.path());
}

#[test]
fn test_store_exposes_api_section_and_session_path() {
    let file = write_config(
        r#"
[api]
base_url = "https://backend.example.com"
connect_timeout_seconds = 2

[session]
path = "/tmp/quickmem-store/session.toml"
"#,
    );
    let store = ConfigStore::open(file.path().to_path_buf()).unwrap();

    let api = store.api();
    assert_eq!(api.base_url, "https://backend.example.com");
    assert_eq!(api.connect_timeout(), std::time::Duration::from_secs(2));
    assert!(store
        .session_path()
        .ends_with("quickmem-store/session.toml"));
}
