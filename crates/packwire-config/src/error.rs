//! Error types for configuration assembly, overrides, and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Boundary errors
    #[error("unknown build mode '{0}' (expected 'production' or 'development')")]
    UnknownMode(String),

    #[error("invalid override '{field}': {message}")]
    InvalidOverride { field: String, message: String },

    // Descriptor construction errors
    #[error("unknown loader: {0}")]
    UnknownLoader(String),

    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("invalid options for '{name}': {message}")]
    InvalidOptions { name: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation { message: String },

    // Filesystem validation errors (for CLI use)
    #[error("context directory not found: {}", .path.display())]
    ContextNotFound { path: PathBuf },

    #[error("entry source not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    // Loading and output errors
    #[error("failed to load overrides: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("failed to serialize build config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::SchemaValidation {
            message: message.into(),
        }
    }

    pub(crate) fn override_value(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidOverride {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}
