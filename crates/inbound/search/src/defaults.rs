//! Default-parameter expansion.
//!
//! Completes the intent parameters with the defaults of an inbound
//! signature. Reference defaults are looked up in the known references;
//! unknown ones leave a placeholder and are only reported as missing once
//! the inbound has matched.

use std::collections::{BTreeMap, BTreeSet};

use inbound_types::names::DEFAULTED_PARAMETER_NAMES;
use inbound_types::{EffectiveParams, IntentParams, ParamValue, ReferenceTable, ReferenceValue, Signature};

/// Intent parameters plus signature defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultExpansion {
    pub params: EffectiveParams,
    /// Sorted names of parameters filled from a resolved default.
    pub defaulted_param_names: Vec<String>,
    /// Parameter name to the unresolved reference its default points to.
    pub pending_references: BTreeMap<String, String>,
}

impl DefaultExpansion {
    /// Reference names to record as missing if the inbound matches.
    pub fn resolve_on_match(&self) -> BTreeSet<String> {
        self.pending_references.values().cloned().collect()
    }

    pub fn is_defaulted(&self, name: &str) -> bool {
        self.defaulted_param_names.iter().any(|n| n == name)
    }

    /// Drop a defaulted or pending parameter.
    pub fn remove(&mut self, name: &str) {
        self.params.remove(name);
        self.defaulted_param_names.retain(|n| n != name);
        self.pending_references.remove(name);
    }
}

/// Expand `intent_params` with the defaults declared in `signature`.
pub fn add_default_parameter_values(
    intent_params: &IntentParams,
    signature: Option<&Signature>,
    known: Option<&ReferenceTable>,
) -> DefaultExpansion {
    let mut expansion = DefaultExpansion {
        params: intent_params
            .iter()
            .filter(|(name, _)| name.as_str() != DEFAULTED_PARAMETER_NAMES)
            .map(|(name, values)| (name.clone(), ParamValue::Values(values.clone())))
            .collect(),
        ..DefaultExpansion::default()
    };

    let Some(signature) = signature else {
        return expansion;
    };

    let mut defaulted = BTreeSet::new();
    for (name, descriptor) in &signature.parameters {
        if expansion.params.contains_key(name) {
            continue;
        }
        let Some(default_value) = &descriptor.default_value else {
            continue;
        };

        if default_value.is_reference() {
            match known.and_then(|refs| refs.get(&default_value.value)) {
                Some(ReferenceValue::Plain(value)) => {
                    expansion
                        .params
                        .insert(name.clone(), ParamValue::single(value.clone()));
                    defaulted.insert(name.clone());
                }
                Some(ReferenceValue::Extended(value)) => {
                    expansion
                        .params
                        .insert(name.clone(), ParamValue::Extended(value.clone()));
                    defaulted.insert(name.clone());
                }
                None => {
                    expansion.params.insert(
                        name.clone(),
                        ParamValue::PendingReference(default_value.clone()),
                    );
                    expansion
                        .pending_references
                        .insert(name.clone(), default_value.value.clone());
                }
            }
        } else {
            expansion
                .params
                .insert(name.clone(), ParamValue::single(default_value.value.clone()));
            defaulted.insert(name.clone());
        }
    }

    expansion.defaulted_param_names = defaulted.into_iter().collect();
    expansion
}
