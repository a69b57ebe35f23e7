//! Matching statistics of a candidate inbound.

use inbound_types::names::{is_technical_parameter, APP_ORIGIN_HINT};
use inbound_types::{AdditionalParameters, EffectiveParams, Inbound, Intent, MatchingInboundStats};

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Count how well `inbound` fits `intent`.
///
/// `params` are the final effective parameters and `defaulted` the final
/// defaulted parameter names of the match.
pub fn generate_matching_inbound_stats(
    intent: &Intent,
    inbound: &Inbound,
    params: &EffectiveParams,
    defaulted: &[String],
) -> MatchingInboundStats {
    let declared: Vec<(&String, &inbound_types::ParameterDescriptor)> = inbound
        .signature
        .iter()
        .flat_map(|s| s.parameters.iter())
        .filter(|(name, _)| !is_technical_parameter(name))
        .collect();

    let matching: Vec<_> = declared
        .iter()
        .filter(|(name, _)| intent.params.contains_key(name.as_str()))
        .collect();

    let ignores_undeclared = inbound.additional_parameters() == AdditionalParameters::Ignored;
    let potentially_matching = intent
        .params
        .keys()
        .filter(|name| !is_technical_parameter(name))
        .filter(|name| {
            !ignores_undeclared || inbound.signature.as_ref().is_some_and(|s| s.declares(name))
        })
        .count();

    MatchingInboundStats {
        count_matching_params: count(matching.len()),
        count_matching_required_params: count(matching.iter().filter(|(_, d)| d.required).count()),
        count_matching_filter_params: count(
            matching.iter().filter(|(_, d)| d.filter.is_some()).count(),
        ),
        count_free_inbound_params: count(
            declared
                .iter()
                .filter(|(name, _)| !params.contains_key(name.as_str()))
                .count(),
        ),
        count_defaulted_params: count(
            defaulted
                .iter()
                .filter(|name| !is_technical_parameter(name))
                .count(),
        ),
        count_potentially_matching_params: count(potentially_matching),
        is_current_content_provider: intent.first_value(APP_ORIGIN_HINT)
            == Some(inbound.content_provider_id.as_str()),
    }
}
