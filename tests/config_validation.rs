//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use snmp_codec::config::{CodecConfig, DumpConfig, LoggingConfig};
use snmp_codec::hex::HexCase;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = CodecConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_zero_line_width() {
    let mut config = CodecConfig::default();
    config.dump.line_width = 0;

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("line width must be greater than 0")));
}

#[test]
fn test_odd_line_width() {
    let mut config = CodecConfig::default();
    config.dump.line_width = 63;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("must be even")));
}

#[test]
fn test_excessive_line_width() {
    let mut config = CodecConfig::default();
    config.dump.line_width = 8192;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too large")));
}

#[test]
fn test_empty_debug_token() {
    let dump = DumpConfig {
        debug_token: String::new(),
        ..DumpConfig::default()
    };
    assert!(dump.validate().iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_whitespace_debug_token() {
    let dump = DumpConfig {
        debug_token: "usm dump".to_string(),
        ..DumpConfig::default()
    };
    assert!(dump.validate().iter().any(|e| e.contains("whitespace")));
}

#[test]
fn test_long_app_name() {
    let logging = LoggingConfig {
        app_name: "x".repeat(65),
        ..LoggingConfig::default()
    };
    assert!(logging.validate().iter().any(|e| e.contains("too long")));
}

#[test]
fn test_validate_strict_collects_all_errors() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.dump.line_width = 0;
        c.logging.app_name = String::new();
    });

    let err = config.validate_strict().expect_err("should fail");
    let message = err.to_string();
    assert!(message.contains("line width"));
    assert!(message.contains("Application name"));
}

#[test]
fn test_from_toml() {
    let config = CodecConfig::from_toml(
        r#"
        [hex]
        case = "upper"

        [dump]
        line_width = 32
        debug_token = "usm"

        [logging]
        app_name = "agent"
        log_level = "debug"
        json_format = true
        "#,
    )
    .expect("valid TOML");

    assert_eq!(config.hex.case, HexCase::Upper);
    assert_eq!(config.dump.line_width, 32);
    assert_eq!(config.dump.debug_token, "usm");
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
}

#[test]
fn test_from_toml_missing_sections_use_defaults() {
    let config = CodecConfig::from_toml("").expect("empty TOML is valid");
    assert_eq!(config.dump.line_width, 64);
    assert_eq!(config.hex.case, HexCase::Lower);
}

#[test]
fn test_from_toml_rejects_bad_level() {
    let result = CodecConfig::from_toml(
        r#"
        [logging]
        app_name = "agent"
        log_level = "loud"
        json_format = false
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_save_and_load_file() {
    let path = std::env::temp_dir().join(format!("snmp-codec-{}.toml", std::process::id()));
    let config = CodecConfig::default_with_overrides(|c| c.dump.line_width = 16);

    config.save_to_file(&path).expect("save");
    let loaded = CodecConfig::from_file(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.dump.line_width, 16);
}

#[test]
fn test_from_file_missing() {
    let err = CodecConfig::from_file("/nonexistent/snmp-codec.toml").expect_err("missing file");
    assert!(err.to_string().contains("Failed to open config file"));
}

// All environment handling lives in one test; the process environment is shared
// between test threads.
#[test]
fn test_from_env_overrides() {
    std::env::set_var("SNMP_CODEC_HEX_CASE", "upper");
    std::env::set_var("SNMP_CODEC_DUMP_LINE_WIDTH", "16");
    std::env::set_var("SNMP_CODEC_LOG_LEVEL", "trace");
    let config = CodecConfig::from_env().expect("valid env");
    assert_eq!(config.hex.case, HexCase::Upper);
    assert_eq!(config.dump.line_width, 16);
    assert_eq!(config.logging.log_level, Level::TRACE);

    std::env::set_var("SNMP_CODEC_DUMP_LINE_WIDTH", "wide");
    assert!(CodecConfig::from_env().is_err());

    std::env::remove_var("SNMP_CODEC_HEX_CASE");
    std::env::remove_var("SNMP_CODEC_DUMP_LINE_WIDTH");
    std::env::remove_var("SNMP_CODEC_LOG_LEVEL");
}
