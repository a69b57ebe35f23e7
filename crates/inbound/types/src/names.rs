//! Reserved parameter and reference names.
//!
//! Parameters starting with [`TECHNICAL_PARAMETER_PREFIX`] belong to the
//! launchpad runtime rather than to the target application. They are exempt
//! from the additional-parameters policy and excluded from matching
//! statistics.

/// Prefix of technical (framework-internal) parameters.
pub const TECHNICAL_PARAMETER_PREFIX: &str = "sap-";

/// Output-only parameter listing the defaulted parameter names.
///
/// Never copied from an incoming intent.
pub const DEFAULTED_PARAMETER_NAMES: &str = "sap-ushell-defaultedParameterNames";

/// Content provider the caller requires the target to come from.
pub const APP_ORIGIN: &str = "sap-app-origin";

/// Content provider the caller prefers (ranking only).
pub const APP_ORIGIN_HINT: &str = "sap-app-origin-hint";

/// Backend system (data origin) the target should run against.
pub const SYSTEM: &str = "sap-system";

/// Explicit numeric ranking override.
pub const PRIORITY: &str = "sap-priority";

/// Preferred UI technology of the target.
pub const TECH_HINT: &str = "sap-ui-tech-hint";

/// Preferred application id of the target.
pub const APP_ID_HINT: &str = "sap-ui-app-id-hint";

/// Prefix of extended user default references.
///
/// Extended values are structured, so they cannot be used as filters.
pub const EXTENDED_USER_DEFAULT_PREFIX: &str = "UserDefault.extended.";

/// Wildcard semantic object.
pub const WILDCARD_SEMANTIC_OBJECT: &str = "*";

/// Whether `name` is a technical parameter.
pub fn is_technical_parameter(name: &str) -> bool {
    name.starts_with(TECHNICAL_PARAMETER_PREFIX)
}

/// Whether `reference` names an extended user default.
pub fn is_extended_user_default(reference: &str) -> bool {
    reference.starts_with(EXTENDED_USER_DEFAULT_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technical_parameters_use_sap_prefix() {
        assert!(is_technical_parameter(SYSTEM));
        assert!(is_technical_parameter(DEFAULTED_PARAMETER_NAMES));
        assert!(!is_technical_parameter("Customer"));
        assert!(!is_technical_parameter("sapling"));
    }

    #[test]
    fn extended_user_defaults_are_detected() {
        assert!(is_extended_user_default("UserDefault.extended.CostCenter"));
        assert!(!is_extended_user_default("UserDefault.CostCenter"));
    }
}
