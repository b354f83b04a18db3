use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sanitized values fed to [`calculate_split`](crate::calculate_split).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitInput {
    /// Parsed bill, or `None` when the bill text is empty or not a number.
    pub bill: Option<Decimal>,

    /// Tip as a percentage of the bill (15 means 15%).
    pub tip_percent: Decimal,

    /// Number of people sharing the total.
    pub people: u32,
}

/// Amounts derived from a [`SplitInput`].
///
/// Values are unrounded; presentation code rounds them to cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    pub tip_amount: Decimal,
    pub total_amount: Decimal,
    pub amount_per_person: Decimal,
}

impl SplitResult {
    /// Returns `true` when every amount is zero.
    pub fn is_zero(&self) -> bool {
        self.tip_amount.is_zero() && self.total_amount.is_zero() && self.amount_per_person.is_zero()
    }
}
