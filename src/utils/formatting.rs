//! Formatting utilities used for CLI and export outputs.

/// Render a number the way the report messages always have: integral
/// values without a fractional part, others in shortest form, and
/// exponent notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn fmt_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", v);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }
    format!("{}", v)
}

pub fn mask_pin(pin: &str) -> String {
    "•".repeat(pin.chars().count())
}

pub fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

/// Cut a string to `max` visible chars, appending "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zero_fraction() {
        assert_eq!(fmt_number(120.0), "120");
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(-0.0), "0");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(fmt_number(1e21), "1e+21");
        assert_eq!(fmt_number(1.5e22), "1.5e+22");
        assert_eq!(fmt_number(1e-7), "1e-7");
        assert_eq!(fmt_number(-2.5e-8), "-2.5e-8");
        assert_eq!(fmt_number(1e20), "100000000000000000000");
        assert_eq!(fmt_number(0.000001), "0.000001");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
