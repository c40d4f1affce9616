//! Script identifier safety: when a config key can be used as a bare variable
//! name, and how to read it from a payload object when it cannot.
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::codegen::literal::quote_string;

static BARE_IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").expect("static identifier regex")
});

/// Reserved and future-reserved words that cannot be bare identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "continue", "debugger", "default", "delete", "do", "else",
    "finally", "for", "function", "if", "in", "instanceof", "new", "return", "switch",
    "this", "throw", "try", "typeof", "var", "void", "while", "with", "class", "const",
    "enum", "export", "extends", "import", "super", "implements", "interface", "let",
    "package", "private", "protected", "public", "static", "yield",
];

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| RESERVED_WORDS.iter().copied().collect());

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(name)
}

pub fn is_safe_identifier(name: &str) -> bool {
    BARE_IDENT.is_match(name) && !is_reserved(name)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Variable name used for declaration and assignment.
///
/// Unsafe names get a `_` prefix and one `_` per UTF-16 unit of every
/// character outside `[A-Za-z0-9_$]`, so astral characters become `__`.
pub fn emitted_identifier(name: &str) -> String {
    if is_safe_identifier(name) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 1);
    out.push('_');
    for c in name.chars() {
        if is_ident_char(c) {
            out.push(c);
        } else {
            out.extend(std::iter::repeat_n('_', c.len_utf16()));
        }
    }
    out
}

/// Property read of `name` on `object`: dot notation when safe, otherwise a
/// quoted subscript keyed by the original name.
pub fn field_access(object: &str, name: &str) -> String {
    if is_safe_identifier(name) {
        format!("{object}.{name}")
    } else {
        format!("{object}[{}]", quote_string(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_safe() {
        for name in ["wiggle", "_private", "$el", "fontSize2", "a", "letter", "classy"] {
            assert!(is_safe_identifier(name), "{name}");
            assert_eq!(emitted_identifier(name), name);
        }
    }

    #[test]
    fn reserved_words_are_unsafe() {
        for name in RESERVED_WORDS {
            assert!(!is_safe_identifier(name), "{name}");
            assert_eq!(emitted_identifier(name), format!("_{name}"));
        }
    }

    #[test]
    fn words_outside_the_table_stay_bare() {
        // The table is fixed; these are valid names in generated output.
        for name in ["await", "null", "true", "undefined", "arguments"] {
            assert!(is_safe_identifier(name), "{name}");
        }
    }

    #[test]
    fn sanitizes_invalid_characters() {
        assert_eq!(emitted_identifier("alert-sound"), "_alert_sound");
        assert_eq!(emitted_identifier("font size"), "_font_size");
        assert_eq!(emitted_identifier("2fast"), "_2fast");
        assert_eq!(emitted_identifier(""), "_");
        assert_eq!(emitted_identifier("é"), "__");
        assert_eq!(emitted_identifier("a😀"), "_a__");
    }

    #[test]
    fn access_notation() {
        assert_eq!(field_access("fieldData", "wiggle"), "fieldData.wiggle");
        assert_eq!(field_access("fieldData", "alert-sound"), r#"fieldData["alert-sound"]"#);
        assert_eq!(field_access("fieldData", "new"), r#"fieldData["new"]"#);
        assert_eq!(field_access("fieldData", r#"say "hi""#), r#"fieldData["say \"hi\""]"#);
    }
}
