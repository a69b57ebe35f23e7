//! # inbound-search
//!
//! Matches a navigation intent against a catalog of inbounds and ranks the
//! matching ones, resolving default and filter parameter references.
//!
//! ## Architecture
//!
//! ```text
//!  Intent + [Inbound] + KnownReferences
//!             │
//!             ▼
//!  ┌────────────────────────────┐
//!  │ ContentProviderLoader      │  awaited once
//!  └─────────────┬──────────────┘
//!                ▼
//!  ┌────────────────────────────┐      per inbound, pure
//!  │ match_one                  │──────────────────────────┐
//!  │  SO/action/form factor     │                          │
//!  │  defaults → origins        │                          │
//!  │  signature → dominance     │                          │
//!  │  additional parameters     │                          │
//!  │  stats → SortKey           │                          │
//!  └─────────────┬──────────────┘                          │
//!                ▼                                          ▼
//!  ┌────────────────────────────┐      ┌───────────────────────────────┐
//!  │ MatchSummary               │◀─────│ missing references (union)    │
//!  └─────────────┬──────────────┘      └───────────────────────────────┘
//!                ▼
//!  ┌────────────────────────────┐
//!  │ sort_matching_results_     │  sap-priority, SortKey,
//!  │ deterministic              │  resolution result (desc)
//!  └────────────────────────────┘
//! ```
//!
//! Rejections are data ([`NoMatch`](inbound_types::NoMatch)); the only
//! error a search can fail with is a failing content-provider loader.

#![deny(unsafe_code)]

pub mod defaults;
pub mod dominance;
pub mod engine;
pub mod error;
pub mod filter;
pub mod loader;
pub mod matcher;
pub mod ordering;
pub mod signature;
pub mod sort_key;
pub mod stats;
pub mod validator;

// ── Re-exports ─────────────────────────────────────────────────────────

pub use defaults::{add_default_parameter_values, DefaultExpansion};
pub use engine::{MatchSummary, SearchEngine};
pub use error::{SearchError, SearchResult};
pub use filter::matches_filter;
pub use loader::{
    ContentProviderInfo, ContentProviderLoader, ContentProviders, StaticContentProviders,
};
pub use matcher::{match_one, InboundEvaluation};
pub use ordering::sort_matching_results_deterministic;
pub use signature::{check_additional_parameters, match_parameter_signature};
pub use sort_key::create_sort_key;
pub use stats::generate_matching_inbound_stats;
pub use validator::{CatalogValidator, IssueSeverity, ValidationIssue, ValidationReport};
