//! Ranking key construction.
//!
//! Precedence, most significant first:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | AIDM  | `sap-ui-app-id-hint` equals the app id |
//! | CURCP | `sap-app-origin-hint` equals the content provider |
//! | x/g   | exact semantic object beats `*` |
//! | TECM  | tech hint match (2 explicit, 1 defaulted) |
//! | MTCH  | matching parameters |
//! | MREQ  | matching required parameters |
//! | NFIL  | matching filter parameters |
//! | NDEF  | defaulted parameters |
//! | POT   | potentially matching parameters |
//! | RFRE  | 999 minus free inbound parameters |
//! | TECP  | technology preference (UI5 > WDA > GUI > none) |

use inbound_types::names::{APP_ID_HINT, TECH_HINT};
use inbound_types::params::first_value;
use inbound_types::{
    EffectiveParams, Inbound, MatchingInboundStats, SortKey, PRIORITY_COUNTER_LIMIT,
    TECHNOLOGY_PREFERENCE,
};

/// Preference of a UI technology; -1 for technologies not in the list.
pub fn technology_priority(technology: Option<&str>) -> i32 {
    match technology {
        None => 0,
        Some(tech) => TECHNOLOGY_PREFERENCE
            .iter()
            .position(|known| *known == tech)
            .map(|idx| idx as i32 + 1)
            .unwrap_or(-1),
    }
}

/// How well the `sap-ui-tech-hint` fits the inbound: 2, 1 or 0.
pub fn tech_hint_match(inbound: &Inbound, params: &EffectiveParams, defaulted: &[String]) -> u8 {
    match (first_value(params, TECH_HINT), inbound.technology()) {
        (Some(hint), Some(technology)) if hint == technology => {
            if defaulted.iter().any(|name| name == TECH_HINT) {
                1
            } else {
                2
            }
        }
        _ => 0,
    }
}

/// Build the ranking key of a matching inbound.
pub fn create_sort_key(
    inbound: &Inbound,
    params: &EffectiveParams,
    defaulted: &[String],
    stats: &MatchingInboundStats,
    generic_so: bool,
) -> SortKey {
    let app_id_hint_match = match (
        first_value(params, APP_ID_HINT),
        inbound.resolution_result.app_id.as_deref(),
    ) {
        (Some(hint), Some(app_id)) => hint == app_id,
        _ => false,
    };

    SortKey {
        app_id_hint_match,
        current_content_provider: stats.is_current_content_provider,
        exact_semantic_object: !generic_so,
        tech_hint_match: tech_hint_match(inbound, params, defaulted),
        matching: stats.count_matching_params,
        matching_required: stats.count_matching_required_params,
        matching_filter: stats.count_matching_filter_params,
        defaulted: stats.count_defaulted_params,
        potentially_matching: stats.count_potentially_matching_params,
        remaining_free: PRIORITY_COUNTER_LIMIT - i64::from(stats.count_free_inbound_params),
        tech_priority: technology_priority(inbound.technology()),
    }
}
