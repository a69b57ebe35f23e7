//! User default references: resolved values in, unresolved names out.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::params::ExtendedValue;

/// A resolved user default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceValue {
    Plain(String),
    Extended(ExtendedValue),
}

impl ReferenceValue {
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(value) => Some(value),
            Self::Extended(_) => None,
        }
    }
}

/// Resolved references of one content provider.
pub type ReferenceTable = BTreeMap<String, ReferenceValue>;

/// Previously resolved references, keyed by content-provider id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownReferences(pub BTreeMap<String, ReferenceTable>);

impl KnownReferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a plain value.
    pub fn with_plain(
        mut self,
        content_provider_id: impl Into<String>,
        reference: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(
            content_provider_id,
            reference,
            ReferenceValue::Plain(value.into()),
        );
        self
    }

    pub fn insert(
        &mut self,
        content_provider_id: impl Into<String>,
        reference: impl Into<String>,
        value: ReferenceValue,
    ) {
        self.0
            .entry(content_provider_id.into())
            .or_default()
            .insert(reference.into(), value);
    }

    pub fn for_content_provider(&self, content_provider_id: &str) -> Option<&ReferenceTable> {
        self.0.get(content_provider_id)
    }
}

/// References a search needed but could not resolve, by content-provider id.
///
/// Only ever grows: merging is a set union.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingReferences(pub BTreeMap<String, BTreeSet<String>>);

impl MissingReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, content_provider_id: &str, reference: impl Into<String>) {
        self.0
            .entry(content_provider_id.to_string())
            .or_default()
            .insert(reference.into());
    }

    pub fn extend<I, S>(&mut self, content_provider_id: &str, references: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for reference in references {
            self.insert(content_provider_id, reference);
        }
    }

    pub fn contains(&self, content_provider_id: &str, reference: &str) -> bool {
        self.0
            .get(content_provider_id)
            .is_some_and(|refs| refs.contains(reference))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    /// Number of distinct (content provider, reference) pairs.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }
}
