//! Reading of intent, catalog and lookup documents.
//!
//! Documents are JSON, or YAML when the file name ends in `.yaml`/`.yml`.

use crate::error::{CliError, CliResult};
use async_trait::async_trait;
use inbound_search::{ContentProviderLoader, ContentProviders, SearchError, SearchResult};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Parse document `contents` read from `path`.
pub fn parse_document<T: DeserializeOwned>(path: &Path, contents: &str) -> CliResult<T> {
    if is_yaml(path) {
        Ok(serde_yaml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Read and parse a document.
pub async fn read_document<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?;
    debug!(path = %path.display(), bytes = contents.len(), "Read document");
    parse_document(path, &contents)
}

/// Content-provider lookup read from a file when the search starts.
#[derive(Debug, Clone)]
pub struct FileContentProviders {
    path: PathBuf,
}

impl FileContentProviders {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentProviderLoader for FileContentProviders {
    async fn load(&self) -> SearchResult<ContentProviders> {
        read_document(&self.path)
            .await
            .map_err(|e| SearchError::ContentProviderLoad(e.to_string()))
    }
}
