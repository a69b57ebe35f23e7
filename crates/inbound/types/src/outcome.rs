//! Per-inbound match outcomes and the ranking key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::inbound::Inbound;
use crate::params::{EffectiveParams, ExtendedValue};

// ── Statistics ─────────────────────────────────────────────────────────

/// Parameter statistics of a matching inbound.
///
/// Technical parameters are excluded from every count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingInboundStats {
    /// Signature parameters the intent supplies.
    pub count_matching_params: u32,
    /// Matching parameters declared `required`.
    pub count_matching_required_params: u32,
    /// Matching parameters carrying a filter.
    pub count_matching_filter_params: u32,
    /// Signature parameters left without any value.
    pub count_free_inbound_params: u32,
    pub count_defaulted_params: u32,
    /// Intent parameters the inbound can take.
    pub count_potentially_matching_params: u32,
    /// Intent's `sap-app-origin-hint` names this inbound's content provider.
    pub is_current_content_provider: bool,
}

// ── Sort Key ───────────────────────────────────────────────────────────

/// Upper bound of the counters encoded in the priority string.
pub const PRIORITY_COUNTER_LIMIT: i64 = 999;

/// Ranking key of a matching inbound. Larger is better.
///
/// Fields are compared in declaration order, so the derived `Ord` is the
/// ranking order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
    /// `sap-ui-app-id-hint` equals the inbound's app id.
    pub app_id_hint_match: bool,
    pub current_content_provider: bool,
    /// Exact semantic object (as opposed to `*`).
    pub exact_semantic_object: bool,
    /// 2: intent tech hint matches, 1: defaulted tech hint matches, 0: none.
    pub tech_hint_match: u8,
    pub matching: u32,
    pub matching_required: u32,
    pub matching_filter: u32,
    pub defaulted: u32,
    pub potentially_matching: u32,
    /// [`PRIORITY_COUNTER_LIMIT`] minus the number of free parameters.
    pub remaining_free: i64,
    /// Index into the technology preference list, -1 when unknown.
    pub tech_priority: i32,
}

impl SortKey {
    /// Legacy string form of the key.
    ///
    /// Comparing two strings lexicographically gives the same order as
    /// comparing the keys, as long as every counter stays within
    /// [`PRIORITY_COUNTER_LIMIT`].
    pub fn priority_string(&self) -> String {
        format!(
            "AIDM={} CURCP={} {} TECM={} MTCH={} MREQ={} NFIL={} NDEF={} POT={} RFRE={} TECP={}",
            u8::from(self.app_id_hint_match),
            u8::from(self.current_content_provider),
            if self.exact_semantic_object { "x" } else { "g" },
            self.tech_hint_match,
            pad3(self.matching),
            pad3(self.matching_required),
            pad3(self.matching_filter),
            pad3(self.defaulted),
            pad3(self.potentially_matching),
            pad3(self.remaining_free),
            pad3(self.tech_priority),
        )
    }
}

/// Left-pad with zeros to three characters (`-1` becomes `0-1`).
fn pad3(n: impl std::fmt::Display) -> String {
    format!("{:0>3}", n.to_string())
}

// ── Match Results ──────────────────────────────────────────────────────

/// Resolution data known as soon as an inbound matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyResolutionResult {
    pub content_provider_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Extended defaults handed to the application through app state.
    #[serde(rename = "oNewAppStateMembers", skip_serializing_if = "BTreeMap::is_empty")]
    pub new_app_state_members: BTreeMap<String, ExtendedValue>,
}

/// An inbound that matched the intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedInbound {
    pub inbound: Inbound,
    pub intent_params_plus_all_defaults: EffectiveParams,
    /// Sorted names of parameters filled from resolved defaults.
    pub defaulted_param_names: Vec<String>,
    pub resolution_result: EarlyResolutionResult,
    pub priority_string: String,
    pub sort_key: SortKey,
    #[serde(rename = "sap-priority", skip_serializing_if = "Option::is_none")]
    pub sap_priority: Option<i64>,
    #[serde(rename = "genericSO")]
    pub generic_so: bool,
    pub is_virtual_inbound: bool,
    pub stats: MatchingInboundStats,
}

/// Why an inbound did not match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NoMatch {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl NoMatch {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            debug: None,
        }
    }

    pub fn with_debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = Some(debug.into());
        self
    }
}

impl std::fmt::Display for NoMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.debug {
            Some(debug) => write!(f, "{} ({})", self.reason, debug),
            None => f.write_str(&self.reason),
        }
    }
}

/// Outcome of matching one inbound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchOutcome {
    Matched(Box<MatchedInbound>),
    Rejected(NoMatch),
}

impl MatchOutcome {
    pub fn matches(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn into_matched(self) -> Option<MatchedInbound> {
        match self {
            Self::Matched(matched) => Some(*matched),
            Self::Rejected(_) => None,
        }
    }

    pub fn no_match(&self) -> Option<&NoMatch> {
        match self {
            Self::Matched(_) => None,
            Self::Rejected(no_match) => Some(no_match),
        }
    }
}
