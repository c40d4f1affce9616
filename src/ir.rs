// Strongly-typed IR between classification and codegen. No serde_json::Value here.

use serde::Serialize;

/// Placeholder emitted when no field survives classification.
pub const NO_FIELDS_CODE: &str = "// No fields found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    Skip,                    // never emitted
    Numeric,
    Boolean,
    String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Boolean(bool),
    Numeric(f64),
    Text(String),            // already coerced to script string semantics
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedField {
    pub original_name: String,       // exact config key, used for payload lookups
    pub category: FieldCategory,     // never `Skip` once classified
    pub default_value: DefaultValue,
    pub emitted_identifier: String,  // safe bare identifier
}

/// Outcome of one generation call. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationResult {
    /// Input was blank or whitespace-only.
    Empty,
    /// Input was not JSON, or not a JSON object at the root.
    ParseError { message: String },
    /// Generated code plus warnings in input order.
    Success { code: String, warnings: Vec<String> },
}

impl GenerationResult {
    pub fn no_fields(warnings: Vec<String>) -> Self {
        Self::Success { code: NO_FIELDS_CODE.to_string(), warnings }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Success { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Self::Success { warnings, .. } => warnings,
            _ => &[],
        }
    }
}
