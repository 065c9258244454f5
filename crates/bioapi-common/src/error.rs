//! Error types shared across BioAPI crates

use thiserror::Error;

/// Result type alias for shared BioAPI operations
pub type Result<T> = std::result::Result<T, BioApiError>;

/// Errors raised while bootstrapping the gateway
#[derive(Error, Debug)]
pub enum BioApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidSetting { key: String, value: String },
}

impl BioApiError {
    pub fn invalid_setting(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            value: value.into(),
        }
    }
}
