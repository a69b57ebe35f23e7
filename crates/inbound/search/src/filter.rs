//! Filter matching of a single parameter value.

use std::collections::BTreeSet;

use inbound_types::names::is_extended_user_default;
use inbound_types::{ParamValue, ReferenceTable, ValueFormat, ValueSpec};
use regex::Regex;
use tracing::error;

/// Whether `value` satisfies `filter`.
///
/// A reference filter whose reference is not in `known` matches
/// provisionally; the reference name is added to `missing` so the caller can
/// resolve it and search again. This also holds for a value that is itself
/// still an unresolved reference. Literal and regexp filters only match
/// scalar values.
pub fn matches_filter(
    value: Option<&ParamValue>,
    filter: Option<&ValueSpec>,
    known: Option<&ReferenceTable>,
    missing: &mut BTreeSet<String>,
) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    let Some(value) = value else {
        return false;
    };
    let scalar = value.first();

    match &filter.format {
        Some(ValueFormat::Reference) => {
            if is_extended_user_default(&filter.value) {
                error!(
                    reference = %filter.value,
                    "Illegal inbound: extended user default used as filter"
                );
                return false;
            }
            match known.and_then(|refs| refs.get(&filter.value)) {
                Some(known_value) => scalar.is_some() && known_value.as_plain() == scalar,
                None => {
                    missing.insert(filter.value.clone());
                    true
                }
            }
        }
        None | Some(ValueFormat::Value) | Some(ValueFormat::Plain) => {
            scalar == Some(filter.value.as_str())
        }
        Some(ValueFormat::Regexp) => match full_match_regex(&filter.value) {
            Ok(re) => scalar.is_some_and(|v| re.is_match(v)),
            Err(e) => {
                error!(pattern = %filter.value, error = %e, "Illegal inbound: invalid regexp filter");
                false
            }
        },
        Some(ValueFormat::Unsupported(raw)) => {
            error!(format = %raw, "Illegal inbound: unsupported filter format");
            false
        }
    }
}

/// Compile `pattern` anchored to the whole value.
pub fn full_match_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inbound_types::{ExtendedValue, ReferenceValue};

    fn check_value(
        value: &ParamValue,
        filter: &ValueSpec,
        known: &ReferenceTable,
    ) -> (bool, BTreeSet<String>) {
        let mut missing = BTreeSet::new();
        let ok = matches_filter(Some(value), Some(filter), Some(known), &mut missing);
        (ok, missing)
    }

    fn check(value: Option<&str>, filter: &ValueSpec, known: &ReferenceTable) -> (bool, BTreeSet<String>) {
        match value {
            Some(value) => check_value(&ParamValue::single(value), filter, known),
            None => {
                let mut missing = BTreeSet::new();
                let ok = matches_filter(None, Some(filter), Some(known), &mut missing);
                (ok, missing)
            }
        }
    }

    #[test]
    fn no_filter_always_matches() {
        let mut missing = BTreeSet::new();
        assert!(matches_filter(None, None, None, &mut missing));
        assert!(matches_filter(Some(&ParamValue::single("x")), None, None, &mut missing));
    }

    #[test]
    fn absent_value_fails_but_empty_string_is_checked() {
        let known = ReferenceTable::new();
        assert!(!check(None, &ValueSpec::literal(""), &known).0);
        assert!(check(Some(""), &ValueSpec::literal(""), &known).0);
        assert!(!check(Some(""), &ValueSpec::literal("A"), &known).0);
    }

    #[test]
    fn literal_formats_compare_exactly() {
        let known = ReferenceTable::new();
        for format in [None, Some(ValueFormat::Value), Some(ValueFormat::Plain)] {
            let filter = ValueSpec {
                format,
                value: "1000".into(),
            };
            assert!(check(Some("1000"), &filter, &known).0);
            assert!(!check(Some("10000"), &filter, &known).0);
        }
    }

    #[test]
    fn regexp_must_match_whole_value() {
        let known = ReferenceTable::new();
        let filter = ValueSpec::regexp("[0-9]+|X");
        assert!(check(Some("123"), &filter, &known).0);
        assert!(check(Some("X"), &filter, &known).0);
        assert!(!check(Some("123X"), &filter, &known).0);
        assert!(!check(Some("a123"), &filter, &known).0);
    }

    #[test]
    fn invalid_regexp_does_not_match() {
        let known = ReferenceTable::new();
        assert!(!check(Some("a"), &ValueSpec::regexp("(unclosed"), &known).0);
    }

    #[test]
    fn unknown_reference_matches_provisionally() {
        let known = ReferenceTable::new();
        let (ok, missing) = check(Some("QH3"), &ValueSpec::reference("UserDefault.System"), &known);
        assert!(ok);
        assert!(missing.contains("UserDefault.System"));
    }

    #[test]
    fn known_reference_compares_value() {
        let mut known = ReferenceTable::new();
        known.insert(
            "UserDefault.System".into(),
            ReferenceValue::Plain("QH3".into()),
        );
        let filter = ValueSpec::reference("UserDefault.System");

        let (ok, missing) = check(Some("QH3"), &filter, &known);
        assert!(ok);
        assert!(missing.is_empty());
        assert!(!check(Some("QH4"), &filter, &known).0);
    }

    #[test]
    fn extended_user_default_filter_is_illegal() {
        let known = ReferenceTable::new();
        let (ok, missing) = check(
            Some("1000"),
            &ValueSpec::reference("UserDefault.extended.Plant"),
            &known,
        );
        assert!(!ok);
        assert!(missing.is_empty());
    }

    #[test]
    fn unsupported_format_does_not_match() {
        let known = ReferenceTable::new();
        let filter = ValueSpec {
            format: Some(ValueFormat::Unsupported("glob".into())),
            value: "*".into(),
        };
        assert!(!check(Some("*"), &filter, &known).0);
    }

    #[test]
    fn pending_value_matches_unknown_reference_filter() {
        let pending = ParamValue::PendingReference(ValueSpec::reference("UserDefault.Plant"));
        let known = ReferenceTable::new();

        let (ok, missing) = check_value(&pending, &ValueSpec::reference("UserDefault.Plant"), &known);
        assert!(ok);
        assert!(missing.contains("UserDefault.Plant"));

        assert!(!check_value(&pending, &ValueSpec::literal("1000"), &known).0);
        assert!(!check_value(&pending, &ValueSpec::regexp(".*"), &known).0);
    }

    #[test]
    fn non_scalar_value_never_equals_known_reference() {
        let mut known = ReferenceTable::new();
        known.insert("UserDefault.Plant".into(), ReferenceValue::Plain("1000".into()));
        let extended = ParamValue::Extended(ExtendedValue::default());

        let (ok, missing) =
            check_value(&extended, &ValueSpec::reference("UserDefault.Plant"), &known);
        assert!(!ok);
        assert!(missing.is_empty());
    }
}
