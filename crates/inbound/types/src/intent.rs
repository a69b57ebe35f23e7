//! Navigation intents.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Device class the intent is resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Desktop,
    Tablet,
    Phone,
}

impl FormFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Phone => "phone",
        }
    }
}

impl std::fmt::Display for FormFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormFactor {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        match s {
            "desktop" => Ok(Self::Desktop),
            "tablet" => Ok(Self::Tablet),
            "phone" => Ok(Self::Phone),
            other => Err(TypeError::UnknownFormFactor(other.to_string())),
        }
    }
}

/// Intent parameters: name to (possibly multiple) values.
pub type IntentParams = BTreeMap<String, Vec<String>>;

/// A parsed navigation request.
///
/// Produced by the hash parser of the shell runtime and never mutated by
/// the search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Semantic object; `None` matches any inbound.
    #[serde(default)]
    pub semantic_object: Option<String>,
    /// Action; `None` matches any inbound.
    #[serde(default)]
    pub action: Option<String>,
    /// Device class; `None` matches any inbound.
    #[serde(default)]
    pub form_factor: Option<FormFactor>,
    /// Intent parameters. Only the first value is used for matching.
    #[serde(default)]
    pub params: IntentParams,
    /// Reject inbounds whose technology differs from `sap-ui-tech-hint`.
    #[serde(default)]
    pub treat_tech_hint_as_filter: bool,
}

impl Intent {
    pub fn new(semantic_object: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            semantic_object: Some(semantic_object.into()),
            action: Some(action.into()),
            ..Self::default()
        }
    }

    pub fn with_form_factor(mut self, form_factor: FormFactor) -> Self {
        self.form_factor = Some(form_factor);
        self
    }

    /// Add a single-valued parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), vec![value.into()]);
        self
    }

    /// Add a multi-valued parameter.
    pub fn with_param_values(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.params.insert(name.into(), values);
        self
    }

    pub fn treating_tech_hint_as_filter(mut self) -> Self {
        self.treat_tech_hint_as_filter = true;
        self
    }

    /// First value of an intent parameter.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
