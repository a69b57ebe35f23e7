//! CLI error types

use inbound_search::SearchError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input document could not be read
    #[error("Cannot read {path}: {source}")]
    Read {
        /// Path of the document
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The catalog has error-severity issues
    #[error("Catalog validation failed with {0} error(s)")]
    Validation(usize),

    /// Search error
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
