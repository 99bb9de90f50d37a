//! Quantity string parsing
//!
//! LLM-generated quantities arrive as free text: "3", "2.5", "1/2",
//! "1 1/2". Parsing is deliberately lenient - anything unparseable becomes
//! a multiplier of 1.0 so a malformed quantity can never crash nutrition
//! computation. That fallback is a design choice, not a bug.

use regex::Regex;
use tracing::debug;

/// Convert a quantity string into a numeric multiplier.
///
/// Handles plain integers, decimals, simple fractions, and mixed numbers
/// (`<int> <int>/<int>`). Returns 1.0 when no parse path succeeds.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim();

    // Mixed number first: "1 1/2"
    let mixed = Regex::new(r"^(\d+)\s+(\d+)/(\d+)$").ok();
    if let Some(caps) = mixed.and_then(|re| re.captures(text)) {
        let whole: f64 = caps[1].parse().unwrap_or(0.0);
        let numerator: f64 = caps[2].parse().unwrap_or(0.0);
        let denominator: f64 = caps[3].parse().unwrap_or(1.0);
        if denominator != 0.0 {
            return whole + numerator / denominator;
        }
    }

    // Simple fraction: "1/2"
    if text.contains('/') {
        let parts: Vec<&str> = text.splitn(2, '/').collect();
        if let [num, den] = parts[..]
            && let (Ok(numerator), Ok(denominator)) = (num.trim().parse::<f64>(), den.trim().parse::<f64>())
            && denominator != 0.0
        {
            return numerator / denominator;
        }
    }

    // Plain number: "3", "2.5"
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }

    debug!(%text, "Unparseable quantity, defaulting to 1.0");
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_amount("3"), 3.0);
        assert_eq!(parse_amount(" 2 "), 2.0);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_amount("2.5"), 2.5);
        assert_eq!(parse_amount("0.25"), 0.25);
    }

    #[test]
    fn test_simple_fraction() {
        assert_eq!(parse_amount("1/2"), 0.5);
        assert_eq!(parse_amount("3/4"), 0.75);
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(parse_amount("1 1/2"), 1.5);
        assert_eq!(parse_amount("2 1/4"), 2.25);
    }

    #[test]
    fn test_garbage_falls_back_to_one() {
        assert_eq!(parse_amount("garbage"), 1.0);
        assert_eq!(parse_amount(""), 1.0);
        assert_eq!(parse_amount("a/b"), 1.0);
    }

    #[test]
    fn test_zero_denominator_falls_back() {
        assert_eq!(parse_amount("1/0"), 1.0);
        assert_eq!(parse_amount("1 1/0"), 1.0);
    }

    proptest! {
        #[test]
        fn prop_never_panics(s in ".*") {
            let _ = parse_amount(&s);
        }

        #[test]
        fn prop_plain_numbers_roundtrip(n in 0.0f64..1000.0) {
            let parsed = parse_amount(&n.to_string());
            prop_assert!((parsed - n).abs() < 1e-9);
        }

        #[test]
        fn prop_fractions_parse(num in 1u32..100, den in 1u32..100) {
            let parsed = parse_amount(&format!("{}/{}", num, den));
            prop_assert!((parsed - f64::from(num) / f64::from(den)).abs() < 1e-9);
        }

        #[test]
        fn prop_mixed_numbers_parse(whole in 0u32..20, num in 1u32..10, den in 1u32..10) {
            let parsed = parse_amount(&format!("{} {}/{}", whole, num, den));
            let expected = f64::from(whole) + f64::from(num) / f64::from(den);
            prop_assert!((parsed - expected).abs() < 1e-9);
        }
    }
}
