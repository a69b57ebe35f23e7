//! Matching of a single inbound against an intent.
//!
//! The checks run as a sequence of gates; the first failing gate rejects
//! the inbound with a human-readable reason:
//!
//! ```text
//! semantic object → action → form factor → tech hint filter
//!   → default expansion → app origin / data origin → sap-priority
//!   → signature → dominance → additional parameters → statistics & key
//! ```

use std::collections::{BTreeMap, BTreeSet};

use inbound_types::names::{APP_ORIGIN, PRIORITY, SYSTEM, TECH_HINT};
use inbound_types::params::first_value;
use inbound_types::{
    format_inbound, format_signature, AdditionalParameters, DeviceTypes, EarlyResolutionResult,
    FormFactor, Inbound, Intent, MatchOutcome, MatchedInbound, NoMatch, ParamValue,
    ReferenceTable, SearchConfig,
};
use tracing::debug;

use crate::defaults::add_default_parameter_values;
use crate::dominance::remove_dominated_defaults;
use crate::loader::ContentProviders;
use crate::signature::{
    check_additional_parameters, match_parameter_signature, strip_ignored_parameters,
    undeclared_parameters,
};
use crate::sort_key::create_sort_key;
use crate::stats::generate_matching_inbound_stats;

/// Outcome of one inbound plus the references it could not resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundEvaluation {
    pub outcome: MatchOutcome,
    /// Reference names to record under the inbound's content provider.
    ///
    /// Filter references are reported even if the inbound is rejected
    /// later; reference defaults only once it matched.
    pub missing_references: BTreeSet<String>,
}

/// Match `inbound` against `intent`.
///
/// `known` holds the resolved references of the inbound's content provider.
pub fn match_one(
    intent: &Intent,
    inbound: &Inbound,
    known: Option<&ReferenceTable>,
    content_providers: Option<&ContentProviders>,
    config: &SearchConfig,
) -> InboundEvaluation {
    let mut missing_references = BTreeSet::new();
    let outcome = match evaluate(
        intent,
        inbound,
        known,
        content_providers,
        config,
        &mut missing_references,
    ) {
        Ok(matched) => MatchOutcome::Matched(Box::new(matched)),
        Err(no_match) => {
            debug!(
                inbound = %format_inbound(inbound),
                reason = %no_match.reason,
                "Inbound rejected"
            );
            MatchOutcome::Rejected(no_match)
        }
    };

    InboundEvaluation {
        outcome,
        missing_references,
    }
}

fn evaluate(
    intent: &Intent,
    inbound: &Inbound,
    known: Option<&ReferenceTable>,
    content_providers: Option<&ContentProviders>,
    config: &SearchConfig,
    missing: &mut BTreeSet<String>,
) -> Result<MatchedInbound, NoMatch> {
    // Step 1: Semantic object
    let generic_so = inbound.is_generic();
    if let Some(semantic_object) = &intent.semantic_object {
        if !generic_so && *semantic_object != inbound.semantic_object {
            return Err(NoMatch::new(format!(
                "Semantic object \"{}\" did not match \"{}\"",
                inbound.semantic_object, semantic_object
            )));
        }
    }

    // Step 2: Action
    if let Some(action) = &intent.action {
        if *action != inbound.action {
            return Err(NoMatch::new(format!(
                "Action \"{}\" did not match \"{}\"",
                inbound.action, action
            )));
        }
    }

    // Step 3: Form factor
    if let Some(form_factor) = intent.form_factor {
        let device_types = inbound.device_types.unwrap_or_else(DeviceTypes::all);
        if !device_types.supports(form_factor) {
            let supported: Vec<&str> = device_types
                .supported()
                .iter()
                .map(FormFactor::as_str)
                .collect();
            return Err(NoMatch::new(format!(
                "Form factor \"{}\" did not match any of the supported device types: {}",
                form_factor,
                if supported.is_empty() {
                    "none".to_string()
                } else {
                    supported.join(", ")
                }
            )));
        }
    }

    // Step 4: Tech hint as filter
    if intent.treat_tech_hint_as_filter {
        if let Some(hint) = intent.first_value(TECH_HINT) {
            if inbound.technology() != Some(hint) {
                return Err(NoMatch::new(format!(
                    "Tech hint \"{}\" did not match inbound technology \"{}\"",
                    hint,
                    inbound.technology().unwrap_or_default()
                )));
            }
        }
    }

    // Step 5: Defaults
    let signature = inbound.signature.as_ref();
    let mut expansion = add_default_parameter_values(&intent.params, signature, known);

    // Step 6: Content provider and data origin
    if let Some(origin) = first_value(&expansion.params, APP_ORIGIN) {
        if origin != inbound.content_provider_id {
            return Err(NoMatch::new(format!(
                "Content provider \"{}\" did not match {} \"{}\"",
                inbound.content_provider_id, APP_ORIGIN, origin
            )));
        }
    }
    if let (Some(system), Some(providers)) =
        (first_value(&expansion.params, SYSTEM), content_providers)
    {
        if !providers.supports_data_origin(&inbound.content_provider_id, system) {
            return Err(NoMatch::new(format!(
                "Data origin \"{}\" is not supported by content provider \"{}\"",
                system, inbound.content_provider_id
            )));
        }
    }

    // Step 7: Explicit priority
    let sap_priority = first_value(&expansion.params, PRIORITY)
        .and_then(|value| value.trim().parse::<i64>().ok());

    // Step 8: Signature
    if !match_parameter_signature(&expansion.params, signature, known, missing) {
        let no_match = NoMatch::new("Inbound parameter signature did not match");
        return Err(match signature {
            Some(signature) => no_match.with_debug(format_signature(signature)),
            None => no_match,
        });
    }

    // Step 9: Dominance
    remove_dominated_defaults(&mut expansion, signature);

    // Step 10: Additional parameters
    let policy = inbound.additional_parameters();
    if !check_additional_parameters(&expansion.params, signature, &policy) {
        return Err(match &policy {
            AdditionalParameters::Unsupported(raw) => {
                NoMatch::new(format!("Unsupported additionalParameters policy \"{}\"", raw))
            }
            _ => NoMatch::new("Additional parameters not allowed").with_debug(
                undeclared_parameters(&expansion.params, signature).join(", "),
            ),
        });
    }

    // Step 11: Drop ignored parameters
    if policy == AdditionalParameters::Ignored {
        strip_ignored_parameters(&mut expansion.params, signature);
    }

    // Step 12: Statistics, early resolution result, sort key
    let stats = generate_matching_inbound_stats(
        intent,
        inbound,
        &expansion.params,
        &expansion.defaulted_param_names,
    );
    let sort_key = create_sort_key(
        inbound,
        &expansion.params,
        &expansion.defaulted_param_names,
        &stats,
        generic_so,
    );
    let new_app_state_members: BTreeMap<_, _> = expansion
        .params
        .iter()
        .filter_map(|(name, value)| match value {
            ParamValue::Extended(extended) => Some((name.clone(), extended.clone())),
            _ => None,
        })
        .collect();
    missing.extend(expansion.resolve_on_match());

    // Step 13: Match
    Ok(MatchedInbound {
        inbound: inbound.clone(),
        intent_params_plus_all_defaults: expansion.params,
        defaulted_param_names: expansion.defaulted_param_names,
        resolution_result: EarlyResolutionResult {
            content_provider_id: inbound.content_provider_id.clone(),
            runtime: inbound.resolution_result.runtime.clone(),
            new_app_state_members,
        },
        priority_string: sort_key.priority_string(),
        sort_key,
        sap_priority,
        generic_so,
        is_virtual_inbound: config.is_virtual(inbound),
        stats,
    })
}
