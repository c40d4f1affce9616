//! Raw text → validated, order-preserving field configuration.
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

/// Validated configuration: field name → raw descriptor, in source order.
///
/// Duplicate keys keep the slot of their first occurrence and the value of
/// their last (`serde_json` with `preserve_order` inserts into an `IndexMap`).
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    pub entries: IndexMap<String, Value>,
}

impl FieldConfig {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[derive(Debug)]
pub enum Parsed {
    Blank,
    Config(FieldConfig),
}

/// Structural failures. `Display` is the exact message shown to the caller.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object at root level")]
    NotAnObject,
}

/// Whitespace as the browser's `String.prototype.trim` sees it: Unicode
/// `White_Space` plus U+FEFF, minus NEL (U+0085).
pub fn is_script_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

pub fn parse_config(text: &str) -> Result<Parsed, ConfigError> {
    let trimmed = text.trim_matches(is_script_whitespace);
    if trimmed.is_empty() {
        return Ok(Parsed::Blank);
    }
    let value = serde_json::from_str::<Value>(trimmed)?;
    match value {
        Value::Object(map) => {
            let config = FieldConfig { entries: map.into_iter().collect::<IndexMap<_, _>>() };
            tracing::debug!(entries = config.len(), "parsed field configuration");
            Ok(Parsed::Config(config))
        }
        other => {
            tracing::debug!(root = kind_name(&other), "rejected non-object root");
            Err(ConfigError::NotAnObject)
        }
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
