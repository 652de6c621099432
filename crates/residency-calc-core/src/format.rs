//! INR display formatting for the consuming surfaces.
//!
//! Amounts are rendered with zero fractional digits and Indian digit
//! grouping: the last three digits form one group, everything above groups
//! in twos (₹1,23,45,678). The core computes in full precision; this is
//! only the display convention the CLI tables and the form share.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Format a monetary amount as whole rupees with Indian grouping.
pub fn format_inr(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    format!("{}₹{}", if negative { "-" } else { "" }, group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(999)), "₹999");
    }

    #[test]
    fn test_thousands_group_of_three() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(61400)), "₹61,400");
    }

    #[test]
    fn test_lakhs_and_crores_group_in_twos() {
        assert_eq!(format_inr(dec!(123456)), "₹1,23,456");
        assert_eq!(format_inr(dec!(1234567)), "₹12,34,567");
        assert_eq!(format_inr(dec!(12345678)), "₹1,23,45,678");
        assert_eq!(format_inr(dec!(100000000)), "₹10,00,00,000");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(dec!(-50000)), "-₹50,000");
        assert_eq!(format_inr(dec!(-123)), "-₹123");
    }

    #[test]
    fn test_zero_fraction_digits_half_away_from_zero() {
        assert_eq!(format_inr(dec!(99.5)), "₹100");
        assert_eq!(format_inr(dec!(99.4)), "₹99");
        assert_eq!(format_inr(dec!(-0.5)), "-₹1");
        assert_eq!(format_inr(dec!(-0.4)), "₹0");
    }
}
