//! # Configuration Management
//!
//! Centralized configuration for the codec and its dump helpers.
//!
//! The core codecs are pure functions and take no configuration. The settings
//! here drive the presentation layer: which hex alphabet dumps use, how wide a
//! dump line is, which debug token dumps are filed under, and how logging is
//! initialized.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment variable overrides via `from_env()`

use crate::core::hex::HexCase;
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Number of hex characters per dump line
pub const DEFAULT_DUMP_LINE_WIDTH: usize = 64;

/// Debug token dumps are filed under when none is configured
pub const DEFAULT_DEBUG_TOKEN: &str = "dump";

/// Minimum length of a structured engine identifier (enterprise + sub-type)
pub const ENGINE_ID_MIN_STRUCTURED_LEN: usize = 5;

/// Upper bound on an engine identifier's length
pub const ENGINE_ID_MAX_LEN: usize = 32;

/// Upper bound on a locally defined text or octet payload
pub const MAX_LOCAL_PAYLOAD: usize = 27;

/// Main configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Hex rendering settings
    #[serde(default)]
    pub hex: HexConfig,

    /// Chunked dump settings
    #[serde(default)]
    pub dump: DumpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| CodecError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CodecError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    ///
    /// A variable that is set but malformed is an error, not ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(case) = std::env::var("SNMP_CODEC_HEX_CASE") {
            config.hex.case = HexCase::from_name(&case).ok_or_else(|| {
                CodecError::ConfigError(format!("Invalid SNMP_CODEC_HEX_CASE: {case}"))
            })?;
        }

        if let Ok(width) = std::env::var("SNMP_CODEC_DUMP_LINE_WIDTH") {
            config.dump.line_width = width.parse::<usize>().map_err(|e| {
                CodecError::ConfigError(format!("Invalid SNMP_CODEC_DUMP_LINE_WIDTH: {e}"))
            })?;
        }

        if let Ok(token) = std::env::var("SNMP_CODEC_DEBUG_TOKEN") {
            config.dump.debug_token = token;
        }

        if let Ok(level) = std::env::var("SNMP_CODEC_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                CodecError::ConfigError(format!("Invalid SNMP_CODEC_LOG_LEVEL: {level}"))
            })?;
        }

        if let Ok(json) = std::env::var("SNMP_CODEC_LOG_JSON") {
            config.logging.json_format = matches!(json.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CodecError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.dump.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CodecError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Hex rendering configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default)]
pub struct HexConfig {
    /// Alphabet for encoded output and opaque dumps
    #[serde(default)]
    pub case: HexCase,
}

/// Chunked dump configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DumpConfig {
    /// Hex characters per emitted line
    pub line_width: usize,

    /// Token attached to every dumped line
    pub debug_token: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_DUMP_LINE_WIDTH,
            debug_token: String::from(DEFAULT_DEBUG_TOKEN),
        }
    }
}

impl DumpConfig {
    /// Validate dump configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.line_width == 0 {
            errors.push("Dump line width must be greater than 0".to_string());
        } else if self.line_width % 2 != 0 {
            errors.push(format!(
                "Dump line width must be even so bytes are not split across lines: {}",
                self.line_width
            ));
        } else if self.line_width > 4096 {
            errors.push(format!(
                "Dump line width too large: {} (maximum: 4096)",
                self.line_width
            ));
        }

        if self.debug_token.is_empty() {
            errors.push("Debug token cannot be empty".to_string());
        } else if self.debug_token.chars().any(char::is_whitespace) {
            errors.push(format!(
                "Debug token cannot contain whitespace: '{}'",
                self.debug_token
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("snmp-codec"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
