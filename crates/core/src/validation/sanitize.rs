//! String coercion and sanitization primitives used by the evaluator.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Optional sign, optional fractional part, at least one trailing digit.
const NUMERIC_PATTERN: &str = r"^[+-]?([0-9]*[.])?[0-9]+$";

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERIC_PATTERN).expect("valid regex"));

/// Render a scalar JSON value as the text the rules operate on.
///
/// Returns `None` for `null`, arrays, and objects.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether `s` is a plain decimal number (no exponent, no thousands separator).
pub fn is_numeric(s: &str) -> bool {
    NUMERIC_RE.is_match(s)
}

/// Parse the leading integer part of `s`, the way `"3.7"` reads as `3`.
///
/// Returns `None` when there are no leading digits or the value overflows.
pub fn to_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    format!("{sign}{digits}").parse().ok()
}

/// Replace HTML-significant characters with their entity form.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            other => out.push(other),
        }
    }
    out
}
