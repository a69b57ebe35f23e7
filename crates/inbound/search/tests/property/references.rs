//! Property tests: unresolved references never reject, and resolving them
//! never costs unrelated matches.

use inbound_search::SearchEngine;
use inbound_types::names::SYSTEM;
use inbound_types::{
    AdditionalParameters, Inbound, KnownReferences, ParameterDescriptor, ResolutionResult,
    Signature, ValueSpec,
};
use proptest::prelude::*;

use crate::strategies::{arb_catalog, arb_intent, arb_signature, urls};

const SYSTEM_REFERENCE: &str = "UserDefault.System";

fn referencing_inbound() -> Inbound {
    Inbound::new("Object", "action")
        .with_signature(
            Signature::new()
                .with_parameter(
                    SYSTEM,
                    ParameterDescriptor::default()
                        .with_filter(ValueSpec::reference(SYSTEM_REFERENCE)),
                )
                .with_additional_parameters(AdditionalParameters::Allowed),
        )
        .with_resolution_result(ResolutionResult {
            url: Some("/referenced".into()),
            ..ResolutionResult::default()
        })
}

proptest! {
    #[test]
    fn supplying_a_reference_keeps_previous_matches(
        intent in arb_intent(),
        catalog in arb_catalog(),
        system in "[A-Z]{2}[0-9]",
    ) {
        let intent = intent.with_param(SYSTEM, system.clone());
        let mut catalog = catalog;
        catalog.push(referencing_inbound());
        let engine = SearchEngine::with_defaults();

        let before = engine.match_all(&intent, &catalog, &KnownReferences::new(), None);
        prop_assert!(before.missing_references.contains("", SYSTEM_REFERENCE));
        prop_assert!(urls(&before.match_results).contains(&Some("/referenced".to_string())));

        let known = KnownReferences::new().with_plain("", SYSTEM_REFERENCE, system);
        let after = engine.match_all(&intent, &catalog, &known, None);
        prop_assert!(after.missing_references.is_empty());
        prop_assert_eq!(urls(&before.match_results), urls(&after.match_results));
    }

    /// A required parameter the intent never carries, without a default,
    /// always rejects.
    #[test]
    fn unmet_required_parameter_never_matches(
        intent in arb_intent(),
        signature in arb_signature(),
    ) {
        let inbound = Inbound::new("Object", "action")
            .with_signature(signature.with_parameter("Z", ParameterDescriptor::required()));

        let summary = SearchEngine::with_defaults()
            .match_all(&intent, &[inbound], &KnownReferences::new(), None);
        prop_assert!(summary.match_results.is_empty());
    }
}
