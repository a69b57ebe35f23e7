//! Property tests: the legacy priority string orders matches exactly like
//! the structured sort key.

use inbound_search::SearchEngine;
use inbound_types::{KnownReferences, SortKey, PRIORITY_COUNTER_LIMIT};
use proptest::prelude::*;

use crate::strategies::{arb_catalog, arb_intent};

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    let counter = 0u32..=PRIORITY_COUNTER_LIMIT as u32;
    (
        (any::<bool>(), any::<bool>(), any::<bool>(), 0u8..=2),
        (
            counter.clone(),
            counter.clone(),
            counter.clone(),
            counter.clone(),
            counter,
        ),
        (0i64..=PRIORITY_COUNTER_LIMIT, -1i32..=3),
    )
        .prop_map(
            |(
                (app_id_hint_match, current_content_provider, exact_semantic_object, tech_hint_match),
                (matching, matching_required, matching_filter, defaulted, potentially_matching),
                (remaining_free, tech_priority),
            )| SortKey {
                app_id_hint_match,
                current_content_provider,
                exact_semantic_object,
                tech_hint_match,
                matching,
                matching_required,
                matching_filter,
                defaulted,
                potentially_matching,
                remaining_free,
                tech_priority,
            },
        )
}

proptest! {
    #[test]
    fn string_order_equals_key_order(a in arb_sort_key(), b in arb_sort_key()) {
        prop_assert_eq!(a.cmp(&b), a.priority_string().cmp(&b.priority_string()));
    }

    #[test]
    fn priority_strings_have_fixed_width(key in arb_sort_key()) {
        let reference = SortKey::default().priority_string();
        prop_assert_eq!(key.priority_string().len(), reference.len());
    }

    /// Matched results carry a priority string rendered from their key.
    #[test]
    fn matched_results_agree_pairwise(intent in arb_intent(), catalog in arb_catalog()) {
        let summary = SearchEngine::with_defaults()
            .match_all(&intent, &catalog, &KnownReferences::new(), None);

        for a in &summary.match_results {
            prop_assert_eq!(&a.priority_string, &a.sort_key.priority_string());
            for b in &summary.match_results {
                prop_assert_eq!(
                    a.sort_key.cmp(&b.sort_key),
                    a.priority_string.cmp(&b.priority_string)
                );
            }
        }
    }
}
