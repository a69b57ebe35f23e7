//! Compact textual forms of intents, inbounds and signatures.
//!
//! Used as keys of no-match reasons and in log output.
//!
//! ```text
//! #SalesOrder-display{SalesOrder, [Plant:=1000], sap-system:@UserDefault.System}<+>
//! ```
//!
//! Optional parameters are bracketed, `:` introduces a filter, `:=` a
//! default, `@` a reference, `/../` a regular expression and `->` a rename.
//! The trailing marker is the additional-parameters policy: `<+>` allowed,
//! `<o>` ignored, `<->` not allowed.

use crate::inbound::{AdditionalParameters, Inbound, ParameterDescriptor, Signature, ValueFormat, ValueSpec};
use crate::intent::Intent;

fn format_value(spec: &ValueSpec) -> String {
    match &spec.format {
        None | Some(ValueFormat::Value) | Some(ValueFormat::Plain) => spec.value.clone(),
        Some(ValueFormat::Reference) => format!("@{}", spec.value),
        Some(ValueFormat::Regexp) => format!("/{}/", spec.value),
        Some(ValueFormat::Unsupported(raw)) => format!("<{}>{}", raw, spec.value),
    }
}

fn format_parameter(name: &str, descriptor: &ParameterDescriptor) -> String {
    let mut out = name.to_string();
    if let Some(filter) = &descriptor.filter {
        out.push(':');
        out.push_str(&format_value(filter));
    }
    if let Some(default_value) = &descriptor.default_value {
        out.push_str(":=");
        out.push_str(&format_value(default_value));
    }
    if let Some(target) = &descriptor.rename_to {
        out.push_str("->");
        out.push_str(target);
    }
    if descriptor.required {
        out
    } else {
        format!("[{}]", out)
    }
}

fn policy_marker(policy: Option<&AdditionalParameters>) -> String {
    match policy {
        None => String::new(),
        Some(AdditionalParameters::Allowed) => "<+>".into(),
        Some(AdditionalParameters::Ignored) => "<o>".into(),
        Some(AdditionalParameters::NotAllowed) => "<->".into(),
        Some(AdditionalParameters::Unsupported(raw)) => format!("<{}?>", raw),
    }
}

/// Parameter list of a signature, without braces.
pub fn format_signature(signature: &Signature) -> String {
    signature
        .parameters
        .iter()
        .map(|(name, descriptor)| format_parameter(name, descriptor))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Single-line form of an inbound.
pub fn format_inbound(inbound: &Inbound) -> String {
    let (params, policy) = match &inbound.signature {
        Some(signature) => (
            format_signature(signature),
            policy_marker(signature.additional_parameters.as_ref()),
        ),
        None => (String::new(), String::new()),
    };
    let mut out = format!(
        "#{}-{}{{{}}}{}",
        inbound.semantic_object, inbound.action, params, policy
    );
    if !inbound.content_provider_id.is_empty() {
        out.push('@');
        out.push_str(&inbound.content_provider_id);
    }
    out
}

/// Single-line form of an intent, e.g. `#SalesOrder-display?SalesOrder=42`.
pub fn format_intent(intent: &Intent) -> String {
    let mut out = format!(
        "#{}-{}",
        intent.semantic_object.as_deref().unwrap_or("*"),
        intent.action.as_deref().unwrap_or("*")
    );
    let params: Vec<String> = intent
        .params
        .iter()
        .flat_map(|(name, values)| values.iter().map(move |v| format!("{}={}", name, v)))
        .collect();
    if !params.is_empty() {
        out.push('?');
        out.push_str(&params.join("&"));
    }
    out
}
