//! Catalog validator: reports inbound configuration errors up front.
//!
//! Matching logs these problems and rejects the offending inbound each time
//! it is considered. Validation finds them once, without an intent.

use inbound_types::names::is_extended_user_default;
use inbound_types::{format_inbound, AdditionalParameters, Inbound, ValueFormat, ValueSpec};
use serde::Serialize;

use crate::filter::full_match_regex;

// ── Issue Severity ─────────────────────────────────────────────────────

/// Severity level of a validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueSeverity {
    /// The inbound can never match.
    Error,
    /// Advisory: the inbound still matches, maybe not as intended.
    Warning,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

// ── Validation Issue ───────────────────────────────────────────────────

/// A specific issue found in one inbound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Machine-readable code (e.g., "INVALID_REGEXP").
    pub code: String,
    /// Human-readable description.
    pub description: String,
    pub severity: IssueSeverity,
    /// Position of the inbound in the catalog.
    pub index: usize,
    /// Formatted inbound.
    pub inbound: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.severity, self.code, self.description, self.inbound
        )
    }
}

// ── Validation Report ──────────────────────────────────────────────────

/// Issues found in a catalog, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether no error-severity issue was found. Warnings are OK.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.count(IssueSeverity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(IssueSeverity::Warning)
    }

    fn count(&self, severity: IssueSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

// ── Catalog Validator ──────────────────────────────────────────────────

/// Validates inbound catalogs.
#[derive(Clone, Debug, Default)]
pub struct CatalogValidator;

impl CatalogValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate every inbound of a catalog.
    pub fn validate(&self, inbounds: &[Inbound]) -> ValidationReport {
        let issues = inbounds
            .iter()
            .enumerate()
            .flat_map(|(index, inbound)| self.validate_inbound(index, inbound))
            .collect();
        ValidationReport { issues }
    }

    /// Validate a single inbound at catalog position `index`.
    pub fn validate_inbound(&self, index: usize, inbound: &Inbound) -> Vec<ValidationIssue> {
        let formatted = format_inbound(inbound);
        let issue = |code: &str, severity: IssueSeverity, description: String| ValidationIssue {
            code: code.into(),
            description,
            severity,
            index,
            inbound: formatted.clone(),
        };
        let mut issues = Vec::new();

        if inbound.semantic_object.is_empty() {
            issues.push(issue(
                "EMPTY_SEMANTIC_OBJECT",
                IssueSeverity::Error,
                "Inbound has an empty semantic object".into(),
            ));
        }
        if inbound.action.is_empty() {
            issues.push(issue(
                "EMPTY_ACTION",
                IssueSeverity::Error,
                "Inbound has an empty action".into(),
            ));
        }

        let Some(signature) = &inbound.signature else {
            return issues;
        };

        if let Some(AdditionalParameters::Unsupported(raw)) = &signature.additional_parameters {
            issues.push(issue(
                "UNSUPPORTED_ADDITIONAL_PARAMETERS",
                IssueSeverity::Error,
                format!("Unsupported additionalParameters policy \"{}\"", raw),
            ));
        }

        for (name, descriptor) in &signature.parameters {
            if let Some(filter) = &descriptor.filter {
                if let Some((code, description)) = check_filter(name, filter) {
                    issues.push(issue(code, IssueSeverity::Error, description));
                }
            }
            if let Some(ValueSpec {
                format: Some(ValueFormat::Unsupported(raw)),
                ..
            }) = &descriptor.default_value
            {
                issues.push(issue(
                    "UNSUPPORTED_DEFAULT_FORMAT",
                    IssueSeverity::Warning,
                    format!(
                        "Default of parameter \"{}\" has unsupported format \"{}\" and is used verbatim",
                        name, raw
                    ),
                ));
            }
        }

        issues
    }
}

fn check_filter(name: &str, filter: &ValueSpec) -> Option<(&'static str, String)> {
    match &filter.format {
        Some(ValueFormat::Reference) if is_extended_user_default(&filter.value) => Some((
            "EXTENDED_FILTER_REFERENCE",
            format!(
                "Filter of parameter \"{}\" references extended user default \"{}\"",
                name, filter.value
            ),
        )),
        Some(ValueFormat::Regexp) => full_match_regex(&filter.value).err().map(|err| {
            (
                "INVALID_REGEXP",
                format!(
                    "Filter of parameter \"{}\" is not a valid regular expression: {}",
                    name, err
                ),
            )
        }),
        Some(ValueFormat::Unsupported(raw)) => Some((
            "UNSUPPORTED_FILTER_FORMAT",
            format!("Filter of parameter \"{}\" has unsupported format \"{}\"", name, raw),
        )),
        _ => None,
    }
}
