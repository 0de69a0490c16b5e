//! Error types for Janitor operations

use thiserror::Error;

/// Errors that can occur during Janitor operations
#[derive(Error, Debug)]
pub enum JanitorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),

    /// Sweep was given nothing to run
    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    /// Metrics file could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metrics could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for JanitorError {
    fn from(e: toml::de::Error) -> Self {
        JanitorError::TomlParse(e.to_string())
    }
}

impl From<toml::ser::Error> for JanitorError {
    fn from(e: toml::ser::Error) -> Self {
        JanitorError::TomlSerialize(e.to_string())
    }
}
