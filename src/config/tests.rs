//! Configuration tests
//!
//! The round-trip test guards the TOML template: whatever
//! `Config::to_toml` writes must parse back as a `FileConfig`.

use super::*;

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.backend_url.as_deref(), Some(DEFAULT_BACKEND_URL));
    assert_eq!(file.theme.as_deref(), Some("dark"));
    let logging = file.logging.expect("template should carry a [logging] section");
    assert_eq!(logging.level.as_deref(), Some("info"));
    assert_eq!(logging.file_enabled, Some(false));
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.backend_url, "http://127.0.0.1:8000");
    assert!(config.enable_tui);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_partial_file_fills_with_defaults() {
    let file: FileConfig = toml::from_str(r#"backend_url = "http://shop.example:9000""#)
        .expect("minimal config should parse");
    assert_eq!(file.backend_url.as_deref(), Some("http://shop.example:9000"));
    assert!(file.logging.is_none());

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "info");
    assert!(!logging.file_enabled);
}

#[test]
fn test_logging_section_parses() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
level = "debug"
file_enabled = true
file_rotation = "hourly"
"#,
    )
    .expect("logging section should parse");

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Hourly);
    // Unset keys keep their defaults
    assert_eq!(logging.file_prefix, "mkshop.log");
}

#[test]
fn test_rotation_parse_is_lenient() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    // Unknown values fall back to daily
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
