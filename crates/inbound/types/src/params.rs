//! Effective parameters: intent parameters plus signature defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::inbound::ValueSpec;

/// Structured value of an extended user default.
///
/// Carried opaquely to the target application as a new app state member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtendedValue(pub serde_json::Map<String, serde_json::Value>);

impl ExtendedValue {
    pub fn new(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

/// Value bound to an effective parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Values from the intent or a resolved scalar default.
    Values(Vec<String>),
    /// A resolved extended user default.
    Extended(ExtendedValue),
    /// A reference default whose value is not known yet.
    PendingReference(ValueSpec),
}

impl ParamValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Values(vec![value.into()])
    }

    /// First scalar value, if any.
    ///
    /// Extended and pending values have no scalar representation.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Values(values) => values.first().map(String::as_str),
            Self::Extended(_) | Self::PendingReference(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingReference(_))
    }
}

/// Parameter name to effective value.
pub type EffectiveParams = BTreeMap<String, ParamValue>;

/// First scalar value of an effective parameter.
pub fn first_value<'a>(params: &'a EffectiveParams, name: &str) -> Option<&'a str> {
    params.get(name).and_then(ParamValue::first)
}
