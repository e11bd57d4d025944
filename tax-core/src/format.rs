//! en-IN money and percentage formatting.
//!
//! Indian digit grouping keeps the last three digits together and groups
//! the rest in pairs: `12,00,000` rather than `1,200,000`.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats a rupee amount with the `₹` sign and Indian digit grouping.
///
/// Fractions are rounded to paise and trailing zeros are dropped.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::format::format_inr;
///
/// assert_eq!(format_inr(dec!(1200000)), "₹12,00,000");
/// assert_eq!(format_inr(dec!(-75000)), "-₹75,000");
/// assert_eq!(format_inr(dec!(687.50)), "₹687.5");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}₹{}", group_en_in(amount.abs()))
}

/// Formats an amount with Indian digit grouping and no currency sign.
pub fn group_en_in(amount: Decimal) -> String {
    let rounded = round_half_up(amount.abs()).normalize();
    let text = rounded.to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = group_whole_digits(whole);
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn group_whole_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        pairs.push(&head[start..end]);
        end = start;
    }
    pairs.reverse();

    format!("{},{tail}", pairs.join(","))
}

/// Formats a percentage rate without trailing zeros, e.g. `5%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

/// Formats a percentage to exactly two decimals, e.g. `5.96%`.
pub fn format_percent_2dp(rate: Decimal) -> String {
    format!("{:.2}%", round_half_up(rate))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_small_amounts_without_separator() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(999)), "₹999");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(25000)), "₹25,000");
    }

    #[test]
    fn groups_lakhs_and_crores_in_pairs() {
        assert_eq!(format_inr(dec!(300000)), "₹3,00,000");
        assert_eq!(format_inr(dec!(1128500)), "₹11,28,500");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn keeps_significant_fraction_digits() {
        assert_eq!(format_inr(dec!(2750.00)), "₹2,750");
        assert_eq!(format_inr(dec!(800.004)), "₹800");
        assert_eq!(format_inr(dec!(1234.567)), "₹1,234.57");
    }

    #[test]
    fn negative_amounts_carry_leading_minus() {
        assert_eq!(format_inr(dec!(-13750)), "-₹13,750");
    }

    #[test]
    fn rate_formatting() {
        assert_eq!(format_rate(dec!(5)), "5%");
        assert_eq!(format_rate(dec!(4.00)), "4%");
        assert_eq!(format_rate(dec!(12.5)), "12.5%");
    }

    #[test]
    fn percent_2dp_formatting() {
        assert_eq!(format_percent_2dp(dec!(5.958333333)), "5.96%");
        assert_eq!(format_percent_2dp(Decimal::ZERO), "0.00%");
    }
}
