//! Common helpers for money values.
//!
//! Rounding and currency formatting are kept out of the calculation itself so
//! derived amounts stay exact until they are shown to the user.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(38.334)), dec!(38.33));
/// assert_eq!(round_half_up(dec!(38.335)), dec!(38.34));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as dollars with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(115)), "$115.00");
/// assert_eq!(format_currency(dec!(38.3333333)), "$38.33");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("${:.2}", round_half_up(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(28.754));

        assert_eq!(result, dec!(28.75));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(28.755));

        assert_eq!(result, dec!(28.76));
    }

    #[test]
    fn round_half_up_handles_repeating_fraction() {
        let result = round_half_up(dec!(115) / dec!(3));

        assert_eq!(result, dec!(38.33));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_pads_whole_amounts() {
        assert_eq!(format_currency(dec!(30)), "$30.00");
    }

    #[test]
    fn format_currency_pads_single_fraction_digit() {
        assert_eq!(format_currency(dec!(12.5)), "$12.50");
    }

    #[test]
    fn format_currency_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(0.005)), "$0.01");
        assert_eq!(format_currency(dec!(19.994)), "$19.99");
    }
}
