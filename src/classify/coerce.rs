//! Script-runtime coercions (`Number(v)`, `String(v)`, truthiness) over raw
//! descriptor values.
use serde_json::{Number, Value};

use crate::codegen::literal::number_text;
use crate::parse::is_script_whitespace;

/// Numeric value of a JSON number literal; out-of-range literals become ±inf.
///
/// Numbers keep their source text (`arbitrary_precision`), so `1e400` reaches
/// here intact instead of failing to decode.
pub fn number_value(n: &Number) -> f64 {
    n.to_string().parse::<f64>().unwrap_or(f64::NAN)
}

/// `Number(v)`; `None` where the runtime would produce `NaN`.
pub fn to_number(v: &Value) -> Option<f64> {
    match v {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Some(number_value(n)),
        Value::String(s) => str_to_number(s),
        // arrays go through their string form
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [only] => str_to_number(&element_text(only)),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

pub fn str_to_number(s: &str) -> Option<f64> {
    let t = s.trim_matches(is_script_whitespace);
    if t.is_empty() {
        return Some(0.0);
    }
    match t {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(n) = radix_literal(t) {
        return n;
    }
    // Rust's float grammar also takes "inf"/"nan"; the runtime does not.
    let decimal_only = t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_only {
        return None;
    }
    t.parse::<f64>().ok()
}

/// `0x`/`0o`/`0b` integers. Outer `None`: not a radix literal at all.
fn radix_literal(t: &str) -> Option<Option<f64>> {
    let (radix, digits) = match t.get(..2)? {
        "0x" | "0X" => (16, &t[2..]),
        "0o" | "0O" => (8, &t[2..]),
        "0b" | "0B" => (2, &t[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(None);
    }
    let value = digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    });
    Some(value)
}

/// `String(v)`.
pub fn to_text(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(number_value(n)),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(element_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Array.prototype.join renders null elements as empty strings.
fn element_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        other => to_text(other),
    }
}

/// Falsy per the runtime: `null`, `false`, `0`, `""`.
pub fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => {
            let f = number_value(n);
            f == 0.0 || f.is_nan()
        }
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
