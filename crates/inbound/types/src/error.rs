//! Error types for the inbound data model.

use thiserror::Error;

/// Errors raised when parsing model values from strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The form factor is not one of desktop, tablet or phone.
    #[error("unknown form factor: {0}")]
    UnknownFormFactor(String),
}

/// Result type for model parsing.
pub type TypeResult<T> = Result<T, TypeError>;
