//! Domain-specific error types for persona-mind

use thiserror::Error;

/// Main error type for the persona-mind engine and its CLI
#[derive(Error, Debug)]
pub enum PersonaMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<toml::de::Error> for PersonaMindError {
    fn from(err: toml::de::Error) -> Self {
        PersonaMindError::Config {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PersonaMindError {
    fn from(err: serde_json::Error) -> Self {
        PersonaMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for PersonaMindError {
    fn from(err: anyhow::Error) -> Self {
        PersonaMindError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for persona-mind operations
pub type Result<T> = std::result::Result<T, PersonaMindError>;
