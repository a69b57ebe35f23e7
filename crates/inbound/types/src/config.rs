//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::inbound::Inbound;

/// A semantic object / action pair served by the shell itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualInbound {
    pub semantic_object: String,
    pub action: String,
}

impl VirtualInbound {
    pub fn new(semantic_object: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            semantic_object: semantic_object.into(),
            action: action.into(),
        }
    }
}

/// Configuration of the inbound search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Collect a no-match reason for every rejected inbound.
    #[serde(default)]
    pub debug: bool,

    /// Inbounds flagged as virtual in match results.
    #[serde(default = "default_virtual_inbounds")]
    pub virtual_inbounds: Vec<VirtualInbound>,
}

fn default_virtual_inbounds() -> Vec<VirtualInbound> {
    vec![
        VirtualInbound::new("Shell", "home"),
        VirtualInbound::new("Shell", "appfinder"),
        VirtualInbound::new("Shell", "launchpad"),
    ]
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debug: false,
            virtual_inbounds: default_virtual_inbounds(),
        }
    }
}

impl SearchConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn is_virtual(&self, inbound: &Inbound) -> bool {
        self.virtual_inbounds
            .iter()
            .any(|v| v.semantic_object == inbound.semantic_object && v.action == inbound.action)
    }
}
