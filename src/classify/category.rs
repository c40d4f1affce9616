use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ir::FieldCategory;

pub const SKIP_TYPES: &[&str] = &["button", "hidden"];
pub const NUMERIC_TYPES: &[&str] = &["number", "slider"];
pub const BOOLEAN_TYPES: &[&str] = &["checkbox"];

/// Type assumed for descriptors without one.
pub const FALLBACK_TYPE: &str = "text";

static TABLE: Lazy<HashMap<&'static str, FieldCategory>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for t in SKIP_TYPES { m.insert(*t, FieldCategory::Skip); }
    for t in NUMERIC_TYPES { m.insert(*t, FieldCategory::Numeric); }
    for t in BOOLEAN_TYPES { m.insert(*t, FieldCategory::Boolean); }
    m
});

/// Case-insensitive lookup; unknown types are strings.
pub fn categorize(type_name: &str) -> FieldCategory {
    let lowered = type_name.to_lowercase();
    TABLE.get(lowered.as_str()).copied().unwrap_or(FieldCategory::String)
}
