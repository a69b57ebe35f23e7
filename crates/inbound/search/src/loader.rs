//! Content providers and their supported data origins.
//!
//! The lookup is owned by a collaborator (the content-provider registry) and
//! may be remote, hence the async [`ContentProviderLoader`] seam. A search
//! awaits it once before matching.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SearchResult;

/// What is known about one content provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProviderInfo {
    /// Systems (`sap-system` values) the provider's targets can run against.
    #[serde(default)]
    pub supported_data_origins: BTreeSet<String>,
}

/// Content-provider id to provider info.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentProviders(pub BTreeMap<String, ContentProviderInfo>);

impl ContentProviders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a provider with its data origins.
    pub fn with_provider<I, S>(mut self, id: impl Into<String>, data_origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(
            id.into(),
            ContentProviderInfo {
                supported_data_origins: data_origins.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    pub fn get(&self, id: &str) -> Option<&ContentProviderInfo> {
        self.0.get(id)
    }

    /// Whether `system` may be used with the provider.
    ///
    /// Providers without an entry accept every system.
    pub fn supports_data_origin(&self, id: &str, system: &str) -> bool {
        self.get(id)
            .map(|info| info.supported_data_origins.contains(system))
            .unwrap_or(true)
    }
}

/// Loads the content-provider lookup for a search.
#[async_trait]
pub trait ContentProviderLoader: Send + Sync {
    async fn load(&self) -> SearchResult<ContentProviders>;
}

/// Loader over a fixed, in-memory lookup.
#[derive(Clone, Debug, Default)]
pub struct StaticContentProviders {
    providers: ContentProviders,
}

impl StaticContentProviders {
    pub fn new(providers: ContentProviders) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl ContentProviderLoader for StaticContentProviders {
    async fn load(&self) -> SearchResult<ContentProviders> {
        Ok(self.providers.clone())
    }
}
