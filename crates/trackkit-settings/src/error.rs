//! Error types for editor configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or writing the editor config.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The config file exists but could not be read.
    #[error("Cannot read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The config file could not be written.
    #[error("Cannot write config {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// No per-user config directory on this platform.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// The config decoded but failed validation.
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// Validation failures for an otherwise well-formed config.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Only `.json` and `.toml` files are understood.
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: impl ToString) -> Self {
        Self::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
