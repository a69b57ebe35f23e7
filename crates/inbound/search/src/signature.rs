//! Signature checks: required/filter constraints and the
//! additional-parameters policy.

use std::collections::BTreeSet;

use inbound_types::names::is_technical_parameter;
use inbound_types::{AdditionalParameters, EffectiveParams, ReferenceTable, Signature};
use tracing::error;

use crate::filter::matches_filter;

/// Whether every declared parameter satisfies its required flag and filter.
pub fn match_parameter_signature(
    params: &EffectiveParams,
    signature: Option<&Signature>,
    known: Option<&ReferenceTable>,
    missing: &mut BTreeSet<String>,
) -> bool {
    let Some(signature) = signature else {
        return true;
    };

    signature.parameters.iter().all(|(name, descriptor)| {
        if descriptor.required && !params.contains_key(name) {
            return false;
        }
        matches_filter(
            params.get(name),
            descriptor.filter.as_ref(),
            known,
            missing,
        )
    })
}

/// Parameters that are neither declared nor technical.
pub fn undeclared_parameters<'a>(
    params: &'a EffectiveParams,
    signature: Option<&Signature>,
) -> Vec<&'a str> {
    params
        .keys()
        .map(String::as_str)
        .filter(|name| !is_technical_parameter(name))
        .filter(|name| !signature.is_some_and(|s| s.declares(name)))
        .collect()
}

/// Whether `params` satisfy the additional-parameters `policy`.
pub fn check_additional_parameters(
    params: &EffectiveParams,
    signature: Option<&Signature>,
    policy: &AdditionalParameters,
) -> bool {
    match policy {
        AdditionalParameters::Allowed | AdditionalParameters::Ignored => true,
        AdditionalParameters::NotAllowed => undeclared_parameters(params, signature).is_empty(),
        AdditionalParameters::Unsupported(raw) => {
            error!(policy = %raw, "Illegal inbound: unsupported additionalParameters policy");
            false
        }
    }
}

/// Remove undeclared, non-technical parameters.
pub fn strip_ignored_parameters(params: &mut EffectiveParams, signature: Option<&Signature>) {
    params.retain(|name, _| {
        is_technical_parameter(name) || signature.is_some_and(|s| s.declares(name))
    });
}
