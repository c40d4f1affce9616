//! Field classifier & defaulter.
//!
//! Walks the configuration in source order. Every entry either becomes a
//! [`ClassifiedField`], is dropped with a warning (not an object), or is
//! dropped silently (skip category). Warnings never abort classification.
pub mod category;
pub mod coerce;

use serde_json::{Map, Value};

use crate::ident::emitted_identifier;
use crate::ir::{ClassifiedField, DefaultValue, FieldCategory};
use crate::parse::FieldConfig;

pub use category::categorize;

#[derive(Debug, Default)]
pub struct Classification {
    pub fields: Vec<ClassifiedField>,
    pub warnings: Vec<String>,
}

pub fn classify(config: &FieldConfig) -> Classification {
    let mut out = Classification::default();
    for (name, value) in config.iter() {
        let Value::Object(descriptor) = value else {
            out.warnings.push(format!("Skipped \"{name}\": value is not an object"));
            continue;
        };
        let type_name = match descriptor.get("type") {
            Some(t) if !coerce::is_falsy(t) => coerce::to_text(t),
            _ => {
                out.warnings.push(format!("\"{name}\" has no type — treated as text"));
                category::FALLBACK_TYPE.to_string()
            }
        };
        let category = categorize(&type_name);
        if category == FieldCategory::Skip {
            tracing::trace!(field = name, kind = %type_name, "skipped field");
            continue;
        }
        let default_value = default_value(category, descriptor);
        tracing::trace!(field = name, ?category, ?default_value, "classified field");
        out.fields.push(ClassifiedField {
            original_name: name.to_string(),
            category,
            default_value,
            emitted_identifier: emitted_identifier(name),
        });
    }
    tracing::debug!(
        fields = out.fields.len(),
        warnings = out.warnings.len(),
        "classified configuration"
    );
    out
}

/// Default from the descriptor's `value`; `null` counts as absent.
///
/// String-category values keep their runtime type: numbers and booleans are
/// emitted unquoted, everything else as text.
pub fn default_value(category: FieldCategory, descriptor: &Map<String, Value>) -> DefaultValue {
    let given = descriptor.get("value").filter(|v| !v.is_null());
    match (category, given) {
        (FieldCategory::Boolean, Some(v)) => {
            DefaultValue::Boolean(matches!(v, Value::Bool(true)) || v.as_str() == Some("yes"))
        }
        (FieldCategory::Numeric, Some(v)) => DefaultValue::Numeric(coerce::to_number(v).unwrap_or(0.0)),
        (FieldCategory::Boolean, None) => DefaultValue::Boolean(true),
        (FieldCategory::Numeric, None) => DefaultValue::Numeric(0.0),
        (_, Some(Value::Bool(b))) => DefaultValue::Boolean(*b),
        (_, Some(Value::Number(n))) => DefaultValue::Numeric(coerce::number_value(n)),
        (_, Some(v)) => DefaultValue::Text(coerce::to_text(v)),
        (_, None) => DefaultValue::Text(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_config, Parsed};
    use serde_json::json;

    fn run(text: &str) -> Classification {
        match parse_config(text).expect("valid config") {
            Parsed::Config(c) => classify(&c),
            Parsed::Blank => panic!("blank"),
        }
    }

    fn defaults(text: &str) -> Vec<DefaultValue> {
        run(text).fields.into_iter().map(|f| f.default_value).collect()
    }

    fn descriptor(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn non_object_descriptors_warn_and_drop() {
        let c = run(r#"{"a": 1, "b": null, "c": [], "d": "x", "e": {"type": "text"}}"#);
        assert_eq!(c.fields.len(), 1);
        assert_eq!(c.fields[0].original_name, "e");
        assert_eq!(c.warnings, [
            r#"Skipped "a": value is not an object"#,
            r#"Skipped "b": value is not an object"#,
            r#"Skipped "c": value is not an object"#,
            r#"Skipped "d": value is not an object"#,
        ]);
    }

    #[test]
    fn missing_type_is_text() {
        let c = run(r#"{"x": {"value": 3}}"#);
        assert_eq!(c.warnings, [r#""x" has no type — treated as text"#]);
        assert_eq!(c.fields[0].category, FieldCategory::String);
        assert_eq!(c.fields[0].default_value, DefaultValue::Numeric(3.0));
    }

    #[test]
    fn falsy_types_count_as_missing() {
        let c = run(r#"{"a": {"type": null}, "b": {"type": ""}, "c": {"type": false}, "d": {"type": 0}}"#);
        assert_eq!(c.warnings.len(), 4);
        assert!(c.fields.iter().all(|f| f.category == FieldCategory::String));
    }

    #[test]
    fn skip_types_drop_silently() {
        let c = run(r#"{"go": {"type": "BUTTON"}, "secret": {"type": "Hidden", "value": "x"}, "n": {"type": "number"}}"#);
        assert!(c.warnings.is_empty());
        let names: Vec<&str> = c.fields.iter().map(|f| f.original_name.as_str()).collect();
        assert_eq!(names, ["n"]);
    }

    #[test]
    fn checkbox_defaults() {
        assert_eq!(
            defaults(r#"{"a": {"type": "checkbox", "value": "yes"},
                         "b": {"type": "checkbox", "value": "no"},
                         "c": {"type": "checkbox"},
                         "d": {"type": "checkbox", "value": true},
                         "e": {"type": "checkbox", "value": false},
                         "f": {"type": "checkbox", "value": "YES"},
                         "g": {"type": "checkbox", "value": null}}"#),
            [true, false, true, true, false, false, true].map(DefaultValue::Boolean)
        );
    }

    #[test]
    fn numeric_defaults() {
        assert_eq!(
            defaults(r#"{"a": {"type": "slider", "value": "7"},
                         "b": {"type": "slider", "value": "abc"},
                         "c": {"type": "number"},
                         "d": {"type": "number", "value": 2.5},
                         "e": {"type": "Number", "value": true}}"#),
            [7.0, 0.0, 0.0, 2.5, 1.0].map(DefaultValue::Numeric)
        );
    }

    #[test]
    fn string_defaults() {
        let d = descriptor(json!({"value": "Roboto"}));
        assert_eq!(default_value(FieldCategory::String, &d), DefaultValue::Text("Roboto".into()));
        let d = descriptor(json!({"value": ["a", 1]}));
        assert_eq!(default_value(FieldCategory::String, &d), DefaultValue::Text("a,1".into()));
        let d = descriptor(json!({"label": "Nothing"}));
        assert_eq!(default_value(FieldCategory::String, &d), DefaultValue::Text(String::new()));
    }

    #[test]
    fn string_category_keeps_scalar_types() {
        assert_eq!(
            defaults(r#"{"x": {"value": 3},
                         "t": {"type": "text", "value": false},
                         "c": {"type": "colorpicker", "value": "3"},
                         "big": {"type": "text", "value": 1e400}}"#),
            [
                DefaultValue::Numeric(3.0),
                DefaultValue::Boolean(false),
                DefaultValue::Text("3".into()),
                DefaultValue::Numeric(f64::INFINITY),
            ]
        );
    }

    #[test]
    fn non_string_type_is_coerced() {
        let c = run(r#"{"a": {"type": 5}, "b": {"type": true}}"#);
        assert!(c.warnings.is_empty());
        assert!(c.fields.iter().all(|f| f.category == FieldCategory::String));
    }

    #[test]
    fn identifiers_follow_names() {
        let c = run(r#"{"alert-sound": {"type": "sound-input"}, "class": {"type": "text"}, "ok": {}}"#);
        let ids: Vec<&str> = c.fields.iter().map(|f| f.emitted_identifier.as_str()).collect();
        assert_eq!(ids, ["_alert_sound", "_class", "ok"]);
    }
}
