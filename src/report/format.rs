//! Currency and percentage formatting for console reports.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, midpoints away from zero, with the scale fixed at 2.
fn to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Inserts thousands separators into a string of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a monetary amount as dollars and cents.
///
/// # Examples
///
/// ```
/// use roster_stats::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(35333333, 5)), "$353.33");
/// assert_eq!(format_currency(Decimal::new(1234567, 1)), "$123,456.70");
/// assert_eq!(format_currency(Decimal::new(-5, 0)), "-$5.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let cents = to_cents(amount);
    let sign = if cents.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };

    let text = cents.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// Formats a fraction in `[0, 1]` as a percentage with two decimals.
///
/// # Examples
///
/// ```
/// use roster_stats::report::format_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percent(Decimal::new(25, 2)), "25.00%");
/// assert_eq!(format_percent(Decimal::ONE), "100.00%");
/// ```
pub fn format_percent(fraction: Decimal) -> String {
    format!("{}%", to_cents(fraction * Decimal::ONE_HUNDRED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_pads_cents() {
        assert_eq!(format_currency(dec("144")), "$144.00");
        assert_eq!(format_currency(dec("450.5")), "$450.50");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_currency_rounds_midpoint_away_from_zero() {
        assert_eq!(format_currency(dec("0.125")), "$0.13");
        assert_eq!(format_currency(dec("0.135")), "$0.14");
        assert_eq!(format_currency(dec("-0.125")), "-$0.13");
    }

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(format_currency(dec("1000")), "$1,000.00");
        assert_eq!(format_currency(dec("999.999")), "$1,000.00");
        assert_eq!(format_currency(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(format_currency(dec("100000")), "$100,000.00");
    }

    #[test]
    fn test_currency_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_currency_of_repeating_average() {
        let average = dec("1060") / dec("3");
        assert_eq!(format_currency(average), "$353.33");
    }

    #[test]
    fn test_percent_of_thirds() {
        let third = Decimal::ONE / dec("3");
        assert_eq!(format_percent(third), "33.33%");
        assert_eq!(format_percent(third * dec("2")), "66.67%");
    }

    #[test]
    fn test_percent_of_zero() {
        assert_eq!(format_percent(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
