//! Final, fully deterministic ordering of matching inbounds.

use std::cmp::Reverse;

use inbound_types::{MatchedInbound, ResolutionResult};

/// Separates the fields of the tie-break key; sorts below any text.
const FIELD_SEPARATOR: &str = "\u{1f}";

/// Concatenated resolution-result fields that break exact ties.
///
/// Absent fields contribute an empty string, so they sort below any
/// present value.
pub fn tie_break_key(resolution_result: &ResolutionResult) -> String {
    [
        &resolution_result.application_type,
        &resolution_result.ui5_component_name,
        &resolution_result.url,
        &resolution_result.additional_information,
        &resolution_result.text,
    ]
    .iter()
    .map(|field| field.as_deref().unwrap_or_default())
    .collect::<Vec<_>>()
    .join(FIELD_SEPARATOR)
}

/// Sort best match first.
///
/// Order: `sap-priority` (absent counts as 0), then the sort key, then the
/// concatenated resolution result, each descending. Inbounds equal in all
/// three keep their catalog order.
pub fn sort_matching_results_deterministic(results: &mut [MatchedInbound]) {
    results.sort_by_cached_key(|m| {
        Reverse((
            m.sap_priority.unwrap_or(0),
            m.sort_key,
            tie_break_key(&m.inbound.resolution_result),
        ))
    });
}
