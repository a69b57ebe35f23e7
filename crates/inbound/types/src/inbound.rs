//! Inbound navigation target descriptors.
//!
//! An inbound is a catalog entry an application exposes: the
//! semantic object and action it handles, the devices it runs on, and a
//! [`Signature`] declaring the parameters it accepts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::intent::FormFactor;
use crate::names::WILDCARD_SEMANTIC_OBJECT;

// ── Value Format ───────────────────────────────────────────────────────

/// How the `value` of a filter or default is interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueFormat {
    /// Literal value (exact match for filters).
    Value,
    /// Alias of [`ValueFormat::Value`].
    Plain,
    /// Name of a user default reference resolved at search time.
    Reference,
    /// Regular expression the whole value must match.
    Regexp,
    /// Anything else found in the catalog.
    Unsupported(String),
}

impl ValueFormat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value => "value",
            Self::Plain => "plain",
            Self::Reference => "reference",
            Self::Regexp => "regexp",
            Self::Unsupported(raw) => raw,
        }
    }
}

impl From<String> for ValueFormat {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "value" => Self::Value,
            "plain" => Self::Plain,
            "reference" => Self::Reference,
            "regexp" => Self::Regexp,
            _ => Self::Unsupported(raw),
        }
    }
}

impl From<ValueFormat> for String {
    fn from(format: ValueFormat) -> Self {
        format.as_str().to_string()
    }
}

impl std::fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter or default value of a signature parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSpec {
    /// Interpretation of `value`; absent means a literal value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueFormat>,
    #[serde(default)]
    pub value: String,
}

impl ValueSpec {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            format: None,
            value: value.into(),
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            format: Some(ValueFormat::Reference),
            value: name.into(),
        }
    }

    pub fn regexp(pattern: impl Into<String>) -> Self {
        Self {
            format: Some(ValueFormat::Regexp),
            value: pattern.into(),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.format, Some(ValueFormat::Reference))
    }
}

// ── Signature ──────────────────────────────────────────────────────────

/// Declaration of a single inbound parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ValueSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ValueSpec>,
    /// Name the parameter is passed to the application under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename_to: Option<String>,
}

impl ParameterDescriptor {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: ValueSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_default(mut self, default_value: ValueSpec) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn renamed_to(mut self, target: impl Into<String>) -> Self {
        self.rename_to = Some(target.into());
        self
    }
}

/// What happens to intent parameters the signature does not declare.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdditionalParameters {
    /// Passed through to the application.
    Allowed,
    /// Accepted for matching but dropped before the application sees them.
    Ignored,
    /// The inbound does not match.
    NotAllowed,
    /// Anything else found in the catalog.
    Unsupported(String),
}

impl AdditionalParameters {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Allowed => "allowed",
            Self::Ignored => "ignored",
            Self::NotAllowed => "notallowed",
            Self::Unsupported(raw) => raw,
        }
    }
}

impl From<String> for AdditionalParameters {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "allowed" => Self::Allowed,
            "ignored" => Self::Ignored,
            "notallowed" => Self::NotAllowed,
            _ => Self::Unsupported(raw),
        }
    }
}

impl From<AdditionalParameters> for String {
    fn from(policy: AdditionalParameters) -> Self {
        policy.as_str().to_string()
    }
}

impl std::fmt::Display for AdditionalParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters an inbound accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterDescriptor>,
    /// Policy for undeclared parameters; absent behaves as `notallowed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_parameters: Option<AdditionalParameters>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, descriptor: ParameterDescriptor) -> Self {
        self.parameters.insert(name.into(), descriptor);
        self
    }

    pub fn with_additional_parameters(mut self, policy: AdditionalParameters) -> Self {
        self.additional_parameters = Some(policy);
        self
    }

    pub fn declares(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Target name of a declared parameter after renaming.
    pub fn target_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.parameters
            .get(name)
            .and_then(|p| p.rename_to.as_deref())
            .unwrap_or(name)
    }
}

// ── Device Types ───────────────────────────────────────────────────────

/// Devices an inbound supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTypes {
    #[serde(default)]
    pub desktop: bool,
    #[serde(default)]
    pub tablet: bool,
    #[serde(default)]
    pub phone: bool,
}

impl DeviceTypes {
    pub fn all() -> Self {
        Self {
            desktop: true,
            tablet: true,
            phone: true,
        }
    }

    pub fn supports(&self, form_factor: FormFactor) -> bool {
        match form_factor {
            FormFactor::Desktop => self.desktop,
            FormFactor::Tablet => self.tablet,
            FormFactor::Phone => self.phone,
        }
    }

    pub fn supported(&self) -> Vec<FormFactor> {
        [FormFactor::Desktop, FormFactor::Tablet, FormFactor::Phone]
            .into_iter()
            .filter(|ff| self.supports(*ff))
            .collect()
    }
}

// ── Resolution Result ──────────────────────────────────────────────────

/// UI technologies known to the ranking, least preferred first.
pub const TECHNOLOGY_PREFERENCE: [&str; 3] = ["GUI", "WDA", "UI5"];

/// How the target is started once the inbound is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui5_component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// UI technology, e.g. `UI5`, `WDA` or `GUI`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Runtime the application is started in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}

impl ResolutionResult {
    pub fn with_technology(technology: impl Into<String>) -> Self {
        Self {
            technology: Some(technology.into()),
            ..Self::default()
        }
    }
}

// ── Inbound ────────────────────────────────────────────────────────────

/// A navigation target descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inbound {
    /// Semantic object, or `*` for any.
    pub semantic_object: String,
    pub action: String,
    /// Supported devices; `None` means no restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_types: Option<DeviceTypes>,
    /// Originating content provider; empty for the local one.
    #[serde(default)]
    pub content_provider_id: String,
    #[serde(default)]
    pub resolution_result: ResolutionResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

impl Inbound {
    pub fn new(semantic_object: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            semantic_object: semantic_object.into(),
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    pub fn with_device_types(mut self, device_types: DeviceTypes) -> Self {
        self.device_types = Some(device_types);
        self
    }

    pub fn with_content_provider(mut self, id: impl Into<String>) -> Self {
        self.content_provider_id = id.into();
        self
    }

    pub fn with_resolution_result(mut self, resolution_result: ResolutionResult) -> Self {
        self.resolution_result = resolution_result;
        self
    }

    pub fn is_generic(&self) -> bool {
        self.semantic_object == WILDCARD_SEMANTIC_OBJECT
    }

    /// Effective additional-parameters policy (absent means `notallowed`).
    pub fn additional_parameters(&self) -> AdditionalParameters {
        self.signature
            .as_ref()
            .and_then(|s| s.additional_parameters.clone())
            .unwrap_or(AdditionalParameters::NotAllowed)
    }

    pub fn technology(&self) -> Option<&str> {
        self.resolution_result.technology.as_deref()
    }
}
