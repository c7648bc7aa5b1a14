//! Lenient coercion of form-style input.
//!
//! Numeric fields take the longest numeric prefix of the input and fall
//! back to zero, the same way the entry forms always treated them.

use regex::Regex;
use std::sync::LazyLock;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid float regex")
});

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[+-]?\d+").expect("valid int regex"));

pub fn parse_float_lenient(s: &str) -> f64 {
    FLOAT_PREFIX
        .find(s)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_int_lenient(s: &str) -> i64 {
    INT_PREFIX
        .find(s)
        .and_then(|m| m.as_str().trim().parse::<i64>().ok())
        .unwrap_or(0)
}

pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// PIN as typed into the login box: digits only, at most 4.
pub fn sanitize_pin(s: &str) -> String {
    digits_only(s).chars().take(4).collect()
}
