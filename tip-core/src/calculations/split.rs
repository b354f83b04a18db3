//! Tip, total and per-person amounts for a bill.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{SplitInput, calculate_split};
//!
//! let input = SplitInput {
//!     bill: Some(dec!(100.00)),
//!     tip_percent: dec!(20),
//!     people: 4,
//! };
//!
//! let result = calculate_split(&input);
//!
//! assert_eq!(result.tip_amount, dec!(20.00));
//! assert_eq!(result.total_amount, dec!(120.00));
//! assert_eq!(result.amount_per_person, dec!(30.00));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::{SplitInput, SplitResult};

/// Computes the derived amounts for `input`.
///
/// A missing or non-positive bill yields the all-zero result, whatever the
/// tip percentage or head count. A head count of zero leaves the per-person
/// amount at zero. Arithmetic overflow also collapses to the zero result.
pub fn calculate_split(input: &SplitInput) -> SplitResult {
    let Some(bill) = positive_bill(input.bill) else {
        return SplitResult::default();
    };

    let Some(tip_amount) = tip_amount(bill, input.tip_percent) else {
        warn!(%bill, tip_percent = %input.tip_percent, "tip amount overflowed");
        return SplitResult::default();
    };

    let Some(total_amount) = bill.checked_add(tip_amount) else {
        warn!(%bill, %tip_amount, "total amount overflowed");
        return SplitResult::default();
    };

    SplitResult {
        tip_amount,
        total_amount,
        amount_per_person: amount_per_person(total_amount, input.people),
    }
}

fn positive_bill(bill: Option<Decimal>) -> Option<Decimal> {
    bill.filter(|b| *b > Decimal::ZERO)
}

fn tip_amount(
    bill: Decimal,
    tip_percent: Decimal,
) -> Option<Decimal> {
    bill.checked_mul(tip_percent)?
        .checked_div(Decimal::ONE_HUNDRED)
}

fn amount_per_person(
    total: Decimal,
    people: u32,
) -> Decimal {
    if people == 0 {
        return Decimal::ZERO;
    }
    total
        .checked_div(Decimal::from(people))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        bill: Option<Decimal>,
        tip_percent: Decimal,
        people: u32,
    ) -> SplitInput {
        SplitInput {
            bill,
            tip_percent,
            people,
        }
    }

    // =========================================================================
    // calculate_split tests
    // =========================================================================

    #[test]
    fn single_diner_at_default_tip() {
        let result = calculate_split(&input(Some(dec!(100)), dec!(15), 1));

        assert_eq!(result.tip_amount, dec!(15.00));
        assert_eq!(result.total_amount, dec!(115.00));
        assert_eq!(result.amount_per_person, dec!(115.00));
    }

    #[test]
    fn four_diners_at_twenty_percent() {
        let result = calculate_split(&input(Some(dec!(100)), dec!(20), 4));

        assert_eq!(result.tip_amount, dec!(20.00));
        assert_eq!(result.total_amount, dec!(120.00));
        assert_eq!(result.amount_per_person, dec!(30.00));
    }

    #[test]
    fn missing_bill_yields_zeros() {
        let result = calculate_split(&input(None, dec!(25), 3));

        assert_eq!(result, SplitResult::default());
    }

    #[test]
    fn zero_bill_yields_zeros() {
        let result = calculate_split(&input(Some(dec!(0)), dec!(18), 2));

        assert!(result.is_zero());
    }

    #[test]
    fn negative_bill_yields_zeros() {
        let result = calculate_split(&input(Some(dec!(-42.10)), dec!(18), 2));

        assert!(result.is_zero());
    }

    #[test]
    fn zero_tip_keeps_bill_as_total() {
        let result = calculate_split(&input(Some(dec!(64.20)), dec!(0), 2));

        assert_eq!(result.tip_amount, dec!(0));
        assert_eq!(result.total_amount, dec!(64.20));
        assert_eq!(result.amount_per_person, dec!(32.10));
    }

    #[test]
    fn fractional_custom_tip() {
        let result = calculate_split(&input(Some(dec!(80)), dec!(12.5), 1));

        assert_eq!(result.tip_amount, dec!(10));
        assert_eq!(result.total_amount, dec!(90));
    }

    #[test]
    fn uneven_split_is_left_unrounded() {
        let result = calculate_split(&input(Some(dec!(100)), dec!(15), 3));

        assert_eq!(result.total_amount, dec!(115));
        assert_eq!(result.amount_per_person, dec!(115) / dec!(3));
    }

    #[test]
    fn zero_people_leaves_per_person_at_zero() {
        let result = calculate_split(&input(Some(dec!(50)), dec!(10), 0));

        assert_eq!(result.tip_amount, dec!(5));
        assert_eq!(result.total_amount, dec!(55));
        assert_eq!(result.amount_per_person, Decimal::ZERO);
    }

    #[test]
    fn overflow_collapses_to_zero() {
        let result = calculate_split(&input(Some(Decimal::MAX), dec!(25), 1));

        assert!(result.is_zero());
    }
}
