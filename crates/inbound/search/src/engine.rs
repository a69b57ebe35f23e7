//! Batch matching of an intent against an inbound catalog.

use std::collections::BTreeMap;

use inbound_types::{
    format_inbound, format_intent, Inbound, Intent, KnownReferences, MatchOutcome,
    MatchedInbound, MissingReferences, SearchConfig,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::SearchResult;
use crate::loader::{ContentProviderLoader, ContentProviders};
use crate::matcher::{match_one, InboundEvaluation};
use crate::ordering::sort_matching_results_deterministic;

// ── Summary ────────────────────────────────────────────────────────────

/// Result of matching one intent against a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// Matching inbounds, in catalog order unless sorted.
    pub match_results: Vec<MatchedInbound>,
    /// Formatted inbound to rejection reason. Only filled in debug mode.
    pub no_match_reasons: BTreeMap<String, String>,
    /// Content-provider id to the references that must be resolved before
    /// the search can be trusted.
    pub missing_references: MissingReferences,
}

impl MatchSummary {
    pub fn has_missing_references(&self) -> bool {
        !self.missing_references.is_empty()
    }
}

// ── Engine ─────────────────────────────────────────────────────────────

/// The inbound search engine.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Match every inbound of the catalog against `intent`.
    ///
    /// The content-provider lookup is awaited once; matching itself does no
    /// I/O. Results keep catalog order.
    pub async fn match_inbounds(
        &self,
        intent: &Intent,
        inbounds: &[Inbound],
        known: &KnownReferences,
        loader: Option<&dyn ContentProviderLoader>,
    ) -> SearchResult<MatchSummary> {
        let providers = match loader {
            Some(loader) => Some(loader.load().await?),
            None => None,
        };
        Ok(self.match_all(intent, inbounds, known, providers.as_ref()))
    }

    /// [`match_inbounds`](Self::match_inbounds) followed by the final ordering.
    pub async fn resolve(
        &self,
        intent: &Intent,
        inbounds: &[Inbound],
        known: &KnownReferences,
        loader: Option<&dyn ContentProviderLoader>,
    ) -> SearchResult<MatchSummary> {
        let mut summary = self.match_inbounds(intent, inbounds, known, loader).await?;
        sort_matching_results_deterministic(&mut summary.match_results);
        Ok(summary)
    }

    /// Synchronous matching against an already loaded lookup.
    pub fn match_all(
        &self,
        intent: &Intent,
        inbounds: &[Inbound],
        known: &KnownReferences,
        providers: Option<&ContentProviders>,
    ) -> MatchSummary {
        let evaluations: Vec<(&Inbound, InboundEvaluation)> = inbounds
            .iter()
            .map(|inbound| {
                let evaluation = match_one(
                    intent,
                    inbound,
                    known.for_content_provider(&inbound.content_provider_id),
                    providers,
                    &self.config,
                );
                (inbound, evaluation)
            })
            .collect();

        let mut summary = MatchSummary::default();
        for (inbound, evaluation) in evaluations {
            summary
                .missing_references
                .extend(&inbound.content_provider_id, evaluation.missing_references);

            match evaluation.outcome {
                MatchOutcome::Matched(matched) => summary.match_results.push(*matched),
                MatchOutcome::Rejected(no_match) if self.config.debug => {
                    summary
                        .no_match_reasons
                        .entry(format_inbound(inbound))
                        .or_insert_with(|| no_match.to_string());
                }
                MatchOutcome::Rejected(_) => {}
            }
        }

        if summary.has_missing_references() {
            debug!(
                missing = ?summary.missing_references,
                "Search depends on unresolved references"
            );
        }
        info!(
            intent = %format_intent(intent),
            inbounds = inbounds.len(),
            matches = summary.match_results.len(),
            "Inbound search complete"
        );

        summary
    }
}
