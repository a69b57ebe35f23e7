//! Parameter dominance.
//!
//! Several signature parameters may be renamed onto the same target
//! parameter. A value the intent supplies explicitly for any of them wins
//! over defaults of the others, so those defaults are dropped before the
//! remaining checks run.

use std::collections::BTreeSet;

use inbound_types::Signature;

use crate::defaults::DefaultExpansion;

/// Names of defaulted or pending parameters dominated by an explicit value.
pub fn dominated_parameters(expansion: &DefaultExpansion, signature: &Signature) -> BTreeSet<String> {
    let is_explicit = |name: &str| {
        expansion.params.contains_key(name)
            && !expansion.is_defaulted(name)
            && !expansion.pending_references.contains_key(name)
    };

    let candidates = expansion
        .defaulted_param_names
        .iter()
        .chain(expansion.pending_references.keys());

    candidates
        .filter(|candidate| {
            let target = signature.target_name(candidate);
            let renamed_sources = signature
                .parameters
                .keys()
                .filter(|source| signature.target_name(source) == target);

            std::iter::once(target)
                .chain(renamed_sources.map(String::as_str))
                .any(|source| source != candidate.as_str() && is_explicit(source))
        })
        .cloned()
        .collect()
}

/// Remove dominated defaults from `expansion`; returns the removed names.
pub fn remove_dominated_defaults(
    expansion: &mut DefaultExpansion,
    signature: Option<&Signature>,
) -> BTreeSet<String> {
    let Some(signature) = signature else {
        return BTreeSet::new();
    };
    let dominated = dominated_parameters(expansion, signature);
    for name in &dominated {
        expansion.remove(name);
    }
    dominated
}
