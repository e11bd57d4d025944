use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Plain digits, Western grouping (`1,200,000`) or Indian grouping
/// (`12,00,000`), with an optional sign and fraction.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d+|\d{1,3}(?:,\d{3})+|\d{1,2}(?:,\d{2})*,\d{3})(?:\.\d+)?$")
        .expect("amount pattern is valid")
});

const CURRENCY_PREFIXES: [&str; 4] = ["₹", "Rs.", "Rs", "INR"];

/// Error returned when a string is not a rupee amount.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid amount '{input}'")]
pub struct ParseAmountError {
    input: String,
}

/// Strips whitespace and an optional currency prefix.
fn normalize_amount_input(s: &str) -> &str {
    let trimmed = s.trim();
    CURRENCY_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .map(str::trim_start)
        .unwrap_or(trimmed)
}

/// Parses a rupee amount as typed by a user.
///
/// Accepts an optional `₹`, `Rs.` or `INR` prefix and comma grouping in
/// either Western or Indian style. Returns `Ok(None)` for empty or
/// whitespace-only input.
pub fn parse_amount(s: &str) -> Result<Option<Decimal>, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }

    let invalid = || {
        tracing::warn!(input = %s, "invalid amount");
        ParseAmountError {
            input: s.to_string(),
        }
    };

    if !AMOUNT_PATTERN.is_match(normalized) {
        return Err(invalid());
    }

    normalized
        .replace(',', "")
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_digits() {
        assert_eq!(parse_amount("500000"), Ok(Some(dec!(500000))));
        assert_eq!(parse_amount("  1234.56 "), Ok(Some(dec!(1234.56))));
    }

    #[test]
    fn parse_amount_accepts_indian_grouping() {
        assert_eq!(parse_amount("12,00,000"), Ok(Some(dec!(1200000))));
        assert_eq!(parse_amount("1,00,000.50"), Ok(Some(dec!(100000.50))));
    }

    #[test]
    fn parse_amount_accepts_western_grouping() {
        assert_eq!(parse_amount("1,200,000"), Ok(Some(dec!(1200000))));
    }

    #[test]
    fn parse_amount_strips_currency_prefix() {
        assert_eq!(parse_amount("₹7,00,000"), Ok(Some(dec!(700000))));
        assert_eq!(parse_amount("Rs. 50000"), Ok(Some(dec!(50000))));
        assert_eq!(parse_amount("INR 150000"), Ok(Some(dec!(150000))));
    }

    #[test]
    fn parse_amount_keeps_sign() {
        assert_eq!(parse_amount("-5000"), Ok(Some(dec!(-5000))));
    }

    #[test]
    fn parse_amount_empty_is_none() {
        assert_eq!(parse_amount(""), Ok(None));
        assert_eq!(parse_amount("   "), Ok(None));
        assert_eq!(parse_amount("₹"), Ok(None));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12,0,000").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }
}
