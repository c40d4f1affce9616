//! Script literal formatting: numbers in the runtime's canonical text and
//! double-quoted strings.
use serde_json::Value;

use crate::ir::DefaultValue;

/// Canonical script text of a number (`Number.prototype.toString()`).
///
/// Shortest round-trip digits; plain notation for exponents in `[-7, 21)`,
/// exponent notation (`1e+21`, `1.5e-7`) outside.
pub fn number_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string(); // also -0
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits: "1.2345e3", "5e0", "1e-7".
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{sign}{sci}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exp + 1; // position of the decimal point relative to `digits`

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let e = point - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{first}e{e_sign}{}", e.abs())
        } else {
            format!("{first}.{rest}e{e_sign}{}", e.abs())
        }
    };
    format!("{sign}{body}")
}

/// Double-quoted string literal with JSON escaping.
pub fn quote_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

pub fn format_default(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Boolean(b) => b.to_string(),
        DefaultValue::Numeric(n) => number_text(*n),
        DefaultValue::Text(s) => quote_string(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(number_text(5.0), "5");
        assert_eq!(number_text(-12.0), "-12");
        assert_eq!(number_text(0.0), "0");
        assert_eq!(number_text(-0.0), "0");
        assert_eq!(number_text(1000000.0), "1000000");
    }

    #[test]
    fn fractions() {
        assert_eq!(number_text(0.5), "0.5");
        assert_eq!(number_text(1234.5), "1234.5");
        assert_eq!(number_text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_text(-2.25), "-2.25");
        assert_eq!(number_text(0.000001), "0.000001");
    }

    #[test]
    fn exponent_thresholds() {
        assert_eq!(number_text(1e20), "100000000000000000000");
        assert_eq!(number_text(1e21), "1e+21");
        assert_eq!(number_text(1.5e22), "1.5e+22");
        assert_eq!(number_text(1e-7), "1e-7");
        assert_eq!(number_text(-2.5e-8), "-2.5e-8");
        assert_eq!(number_text(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn non_finite() {
        assert_eq!(number_text(f64::INFINITY), "Infinity");
        assert_eq!(number_text(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_text(f64::NAN), "NaN");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(quote_string(""), r#""""#);
        assert_eq!(quote_string("Roboto"), r#""Roboto""#);
        assert_eq!(quote_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote_string("a\\b"), r#""a\\b""#);
        assert_eq!(quote_string("line\nnext\ttab"), r#""line\nnext\ttab""#);
        assert_eq!(quote_string("\u{1}"), r#""\u0001""#);
        assert_eq!(quote_string("</script> é"), r#""</script> é""#);
    }

    #[test]
    fn defaults() {
        assert_eq!(format_default(&DefaultValue::Boolean(true)), "true");
        assert_eq!(format_default(&DefaultValue::Boolean(false)), "false");
        assert_eq!(format_default(&DefaultValue::Numeric(7.0)), "7");
        assert_eq!(format_default(&DefaultValue::Text("rgb(1, 2, 3)".into())), r#""rgb(1, 2, 3)""#);
    }
}
