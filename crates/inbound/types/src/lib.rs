//! # inbound-types
//!
//! Data model of the inbound search: navigation [`Intent`]s, [`Inbound`]
//! target descriptors with their parameter [`Signature`], user default
//! references, and the per-inbound [`MatchOutcome`].
//!
//! All types serialize in camelCase so catalogs and intents can be
//! exchanged as JSON documents.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod inbound;
pub mod intent;
pub mod names;
pub mod outcome;
pub mod params;
pub mod references;

// ── Re-exports ─────────────────────────────────────────────────────────

pub use config::{SearchConfig, VirtualInbound};
pub use error::{TypeError, TypeResult};
pub use format::{format_inbound, format_intent, format_signature};
pub use inbound::{
    AdditionalParameters, DeviceTypes, Inbound, ParameterDescriptor, ResolutionResult, Signature,
    ValueFormat, ValueSpec, TECHNOLOGY_PREFERENCE,
};
pub use intent::{FormFactor, Intent, IntentParams};
pub use outcome::{
    EarlyResolutionResult, MatchOutcome, MatchedInbound, MatchingInboundStats, NoMatch, SortKey,
    PRIORITY_COUNTER_LIMIT,
};
pub use params::{EffectiveParams, ExtendedValue, ParamValue};
pub use references::{KnownReferences, MissingReferences, ReferenceTable, ReferenceValue};
