//! Error types and handling for blogsmith core

use thiserror::Error;

/// Result type alias for blogsmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for blogsmith core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline stage errors
    #[error("Stage error: {0}")]
    Stage(#[from] StageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
///
/// The three kinds map to the loader's phases: the file must exist
/// (`NotFound`), be well-formed YAML (`Parse`), and fit the schema with all
/// declared constraints (`Validation`).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    Parse { message: String },

    #[error("Invalid value for field '{field}': {message}")]
    Validation { field: String, message: String },
}

/// Pipeline stage errors
#[derive(Error, Debug)]
pub enum StageError {
    #[error("Keyword cache error: {message}")]
    Cache { message: String },

    #[error("Failed to render email template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Stage '{stage}' failed: {message}")]
    Failed { stage: String, message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
