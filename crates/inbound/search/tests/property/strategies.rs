//! Shared strategies: small catalogs over a handful of parameter names so
//! that generated intents and inbounds overlap often.

use inbound_types::{
    AdditionalParameters, Inbound, Intent, MatchedInbound, ParameterDescriptor, ResolutionResult,
    Signature, ValueSpec,
};
use proptest::prelude::*;

/// Parameter names inbounds may declare.
pub const DECLARED_NAMES: [&str; 3] = ["A", "B", "C"];

/// Parameter names intents may carry; "D" is never declared.
pub const INTENT_NAMES: [&str; 3] = ["A", "B", "D"];

pub fn arb_technology() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("GUI".to_string())),
        Just(Some("WDA".to_string())),
        Just(Some("UI5".to_string())),
        Just(Some("NWBC".to_string())),
    ]
}

pub fn arb_policy() -> impl Strategy<Value = AdditionalParameters> {
    prop_oneof![
        Just(AdditionalParameters::Allowed),
        Just(AdditionalParameters::Ignored),
        Just(AdditionalParameters::NotAllowed),
    ]
}

pub fn arb_descriptor() -> impl Strategy<Value = ParameterDescriptor> {
    (any::<bool>(), prop::option::of("[0-9]{1,2}")).prop_map(|(required, default)| {
        let descriptor = if required {
            ParameterDescriptor::required()
        } else {
            ParameterDescriptor::default()
        };
        match default {
            Some(value) => descriptor.with_default(ValueSpec::literal(value)),
            None => descriptor,
        }
    })
}

pub fn arb_signature() -> impl Strategy<Value = Signature> {
    (
        prop::collection::btree_map(
            prop::sample::select(DECLARED_NAMES.to_vec()),
            arb_descriptor(),
            0..3,
        ),
        arb_policy(),
    )
        .prop_map(|(parameters, policy)| {
            parameters.into_iter().fold(
                Signature::new().with_additional_parameters(policy),
                |signature, (name, descriptor)| signature.with_parameter(name, descriptor),
            )
        })
}

/// Catalog whose inbounds are told apart by a unique url.
pub fn arb_catalog() -> impl Strategy<Value = Vec<Inbound>> {
    prop::collection::vec(
        (
            prop_oneof![Just("Object"), Just("*")],
            arb_technology(),
            arb_signature(),
        ),
        1..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (semantic_object, technology, signature))| {
                Inbound::new(semantic_object, "action")
                    .with_signature(signature)
                    .with_resolution_result(ResolutionResult {
                        technology,
                        url: Some(format!("/app/{}", i)),
                        ..ResolutionResult::default()
                    })
            })
            .collect()
    })
}

pub fn arb_intent() -> impl Strategy<Value = Intent> {
    prop::collection::btree_map(
        prop::sample::select(INTENT_NAMES.to_vec()),
        "[0-9]{1,2}",
        0..3,
    )
    .prop_map(|params| {
        params
            .into_iter()
            .fold(Intent::new("Object", "action"), |intent, (name, value)| {
                intent.with_param(name, value)
            })
    })
}

pub fn urls(results: &[MatchedInbound]) -> Vec<Option<String>> {
    results
        .iter()
        .map(|m| m.inbound.resolution_result.url.clone())
        .collect()
}
