//! Property tests: the final ranking depends only on the inbounds, never
//! on catalog order or on repetition.

use inbound_search::{sort_matching_results_deterministic, SearchEngine};
use inbound_types::{AdditionalParameters, Inbound, KnownReferences, ResolutionResult};
use proptest::prelude::*;

use crate::strategies::{arb_catalog, arb_intent, arb_signature, arb_technology, urls};

proptest! {
    /// Reversing the catalog does not change the ranked order.
    #[test]
    fn ranking_ignores_catalog_order(intent in arb_intent(), catalog in arb_catalog()) {
        let engine = SearchEngine::with_defaults();
        let known = KnownReferences::new();

        let mut forward = engine.match_all(&intent, &catalog, &known, None);
        sort_matching_results_deterministic(&mut forward.match_results);

        let mut reversed = catalog.clone();
        reversed.reverse();
        let mut backward = engine.match_all(&intent, &reversed, &known, None);
        sort_matching_results_deterministic(&mut backward.match_results);

        prop_assert_eq!(urls(&forward.match_results), urls(&backward.match_results));
    }

    /// Repeated resolution serializes to identical bytes.
    #[test]
    fn repeated_resolution_is_byte_identical(intent in arb_intent(), catalog in arb_catalog()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let engine = SearchEngine::with_defaults();
        let known = KnownReferences::new();

        let (first, second) = rt.block_on(async {
            let first = engine.resolve(&intent, &catalog, &known, None).await.unwrap();
            let second = engine.resolve(&intent, &catalog, &known, None).await.unwrap();
            (first, second)
        });

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Of two otherwise identical inbounds, the exact semantic object wins
    /// over the wildcard.
    #[test]
    fn exact_semantic_object_beats_wildcard(
        intent in arb_intent(),
        signature in arb_signature(),
        technology in arb_technology(),
    ) {
        let mut signature = signature.with_additional_parameters(AdditionalParameters::Allowed);
        for descriptor in signature.parameters.values_mut() {
            descriptor.required = false;
        }
        let resolution_result = ResolutionResult { technology, ..ResolutionResult::default() };
        let inbound = |semantic_object: &str| {
            Inbound::new(semantic_object, "action")
                .with_signature(signature.clone())
                .with_resolution_result(resolution_result.clone())
        };
        let catalog = vec![inbound("*"), inbound("Object")];

        let mut summary = SearchEngine::with_defaults()
            .match_all(&intent, &catalog, &KnownReferences::new(), None);
        sort_matching_results_deterministic(&mut summary.match_results);

        prop_assert_eq!(summary.match_results.len(), 2);
        prop_assert!(!summary.match_results[0].generic_so);
        prop_assert!(summary.match_results[1].generic_so);
    }
}
