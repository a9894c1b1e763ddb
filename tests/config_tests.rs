use std::io::Write;
use tempfile::NamedTempFile;

use ghseek::util::config::AppConfig;

#[test]
fn test_load_full_config() {
    let toml = r#"
[github]
api_url = "https://github.example.com/api/v3"

[search]
min_chars = 2
debounce_ms = 250
per_page = 20

[cache]
ttl_secs = 60

[ui]
show_stats = false
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
    assert_eq!(config.search.min_chars, 2);
    assert_eq!(config.search.debounce_ms, 250);
    assert_eq!(config.search.per_page, 20);
    assert_eq!(config.cache.ttl_secs, 60);
    assert!(!config.ui.show_stats);
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let toml = r#"
[search]
min_chars = 4
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.search.min_chars, 4);
    assert_eq!(config.search.debounce_ms, 500);
    assert_eq!(config.search.per_page, 50);
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.cache.ttl_secs, 300);
    assert!(config.ui.show_stats);
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let toml = "";
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.search.min_chars, 3);
    assert_eq!(config.search.debounce_ms, 500);
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"this is not [valid toml {{").unwrap();

    let result = AppConfig::load(Some(f.path()));
    assert!(result.is_err());
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.search.min_chars, 3);
    assert_eq!(config.search.debounce_ms, 500);
    assert_eq!(config.search.per_page, 50);
    assert_eq!(config.cache.ttl_secs, 300);
    assert!(config.cache.dir.is_none());
    assert!(config.ui.show_stats);
}
