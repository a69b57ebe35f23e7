//! Error types for the inbound search.
//!
//! Rejected inbounds are not errors: they are reported as
//! [`inbound_types::NoMatch`] data. Only failures of collaborators abort a
//! search.

use thiserror::Error;

/// Errors that abort a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The content-provider loader failed.
    #[error("content provider lookup failed: {0}")]
    ContentProviderLoad(String),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
