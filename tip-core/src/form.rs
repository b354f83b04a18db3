//! In-memory state of the tip calculator form.
//!
//! [`TipForm`] owns the raw inputs and the derived [`SplitResult`]. Every
//! mutator recomputes the result before returning, so readers never observe
//! stale amounts.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    DEFAULT_NUMBER_OF_PEOPLE, DEFAULT_TIP_PERCENTAGE, SplitInput, SplitResult, TipSource,
    calculations::{calculate_split, format_currency},
    parse::{parse_bill, sanitize_custom_tip, sanitize_people},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipForm {
    bill_amount: String,
    tip_percentage: Decimal,
    number_of_people: u32,
    tip_source: TipSource,
    results: SplitResult,
}

impl Default for TipForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TipForm {
    /// Creates a form with an empty bill, the default preset and one diner.
    pub fn new() -> Self {
        let mut form = Self {
            bill_amount: String::new(),
            tip_percentage: Decimal::from(DEFAULT_TIP_PERCENTAGE),
            number_of_people: DEFAULT_NUMBER_OF_PEOPLE,
            tip_source: TipSource::Preset,
            results: SplitResult::default(),
        };
        form.recalculate();
        form
    }

    // ─── mutators ────────────────────────────────────────────────────────────

    /// Stores the bill text exactly as typed, including transient invalid
    /// states such as an empty string.
    pub fn set_bill_amount(
        &mut self,
        raw: impl Into<String>,
    ) {
        self.bill_amount = raw.into();
        debug!(bill = %self.bill_amount, "bill amount changed");
        self.recalculate();
    }

    /// Selects one of the quick-select percentages and clears the custom flag.
    pub fn select_preset(
        &mut self,
        percent: u32,
    ) {
        self.tip_percentage = Decimal::from(percent);
        self.tip_source = TipSource::Preset;
        debug!(percent, "preset tip selected");
        self.recalculate();
    }

    /// Applies custom tip text and marks the custom tip active.
    pub fn set_custom_tip(
        &mut self,
        raw: &str,
    ) {
        self.tip_percentage = sanitize_custom_tip(raw);
        self.tip_source = TipSource::Custom;
        debug!(input = %raw, percent = %self.tip_percentage, "custom tip changed");
        self.recalculate();
    }

    /// Marks the custom tip active without changing the percentage, as when
    /// the custom field gains focus.
    pub fn activate_custom_tip(&mut self) {
        self.tip_source = TipSource::Custom;
        self.recalculate();
    }

    pub fn set_number_of_people(
        &mut self,
        raw: &str,
    ) {
        self.number_of_people = sanitize_people(raw);
        debug!(input = %raw, people = self.number_of_people, "number of people changed");
        self.recalculate();
    }

    /// Restores every input to its default; the amounts fall back to zero.
    pub fn reset(&mut self) {
        self.bill_amount.clear();
        self.tip_percentage = Decimal::from(DEFAULT_TIP_PERCENTAGE);
        self.number_of_people = DEFAULT_NUMBER_OF_PEOPLE;
        self.tip_source = TipSource::Preset;
        debug!("form reset");
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.results = calculate_split(&self.input());
    }

    // ─── accessors ───────────────────────────────────────────────────────────

    pub fn bill_amount(&self) -> &str {
        &self.bill_amount
    }

    pub fn tip_percentage(&self) -> Decimal {
        self.tip_percentage
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }

    pub fn tip_source(&self) -> TipSource {
        self.tip_source
    }

    pub fn results(&self) -> &SplitResult {
        &self.results
    }

    /// The sanitized view of the current inputs.
    pub fn input(&self) -> SplitInput {
        SplitInput {
            bill: parse_bill(&self.bill_amount),
            tip_percent: self.tip_percentage,
            people: self.number_of_people,
        }
    }

    // ─── presentation queries ────────────────────────────────────────────────

    /// Returns `true` if the preset button for `percent` should look selected.
    pub fn is_preset_active(
        &self,
        percent: u32,
    ) -> bool {
        self.tip_source == TipSource::Preset && self.tip_percentage == Decimal::from(percent)
    }

    pub fn is_custom_active(&self) -> bool {
        self.tip_source == TipSource::Custom
    }

    /// Text to show in the custom tip field.
    ///
    /// Blank while a preset is active. A 0% custom tip is also shown blank once
    /// a bill has been entered, so the field reads as "not filled in".
    pub fn custom_tip_display(&self) -> String {
        match self.tip_source {
            TipSource::Preset => String::new(),
            TipSource::Custom if self.tip_percentage.is_zero() && !self.bill_amount.is_empty() => {
                String::new()
            }
            TipSource::Custom => self.tip_percentage.normalize().to_string(),
        }
    }

    /// The "total tip for the bill" caption only matters when splitting.
    pub fn shows_tip_subtitle(&self) -> bool {
        self.number_of_people > 1
    }

    pub fn summary(&self) -> SplitSummary {
        SplitSummary {
            tip: format_currency(self.results.tip_amount),
            total: format_currency(self.results.total_amount),
            per_person: format_currency(self.results.amount_per_person),
        }
    }
}

/// Currency-formatted amounts, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub tip: String,
    pub total: String,
    pub per_person: String,
}

impl fmt::Display for SplitSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Tip Amount:        {}", self.tip)?;
        writeln!(f, "Total Amount:      {}", self.total)?;
        write!(f, "Amount per Person: {}", self.per_person)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_form_has_defaults_and_zero_results() {
        let form = TipForm::new();

        assert_eq!(form.bill_amount(), "");
        assert_eq!(form.tip_percentage(), dec!(15));
        assert_eq!(form.number_of_people(), 1);
        assert_eq!(form.tip_source(), TipSource::Preset);
        assert!(form.results().is_zero());
    }

    #[test]
    fn bill_change_recomputes_immediately() {
        let mut form = TipForm::new();

        form.set_bill_amount("100");

        assert_eq!(form.results().tip_amount, dec!(15.00));
        assert_eq!(form.results().total_amount, dec!(115.00));
        assert_eq!(form.results().amount_per_person, dec!(115.00));
    }

    #[test]
    fn bill_text_is_stored_verbatim() {
        let mut form = TipForm::new();

        form.set_bill_amount("12.");
        assert_eq!(form.bill_amount(), "12.");

        form.set_bill_amount("not a number");
        assert_eq!(form.bill_amount(), "not a number");
        assert!(form.results().is_zero());
    }

    #[test]
    fn empty_bill_zeroes_outputs_regardless_of_other_inputs() {
        let mut form = TipForm::new();
        form.select_preset(25);
        form.set_number_of_people("6");

        form.set_bill_amount("");

        assert!(form.results().is_zero());
    }

    #[test]
    fn preset_selection_clears_custom_flag() {
        let mut form = TipForm::new();
        form.set_custom_tip("12");

        form.select_preset(20);

        assert_eq!(form.tip_percentage(), dec!(20));
        assert!(!form.is_custom_active());
        assert!(form.is_preset_active(20));
        assert!(!form.is_preset_active(15));
    }

    #[test]
    fn custom_tip_sets_custom_flag() {
        let mut form = TipForm::new();

        form.set_custom_tip("22");

        assert!(form.is_custom_active());
        assert_eq!(form.tip_percentage(), dec!(22));
    }

    #[test]
    fn custom_tip_matching_a_preset_does_not_activate_the_preset() {
        let mut form = TipForm::new();

        form.set_custom_tip("15");

        assert!(!form.is_preset_active(15));
    }

    #[test]
    fn negative_custom_tip_normalizes_to_zero() {
        let mut form = TipForm::new();
        form.set_bill_amount("50");

        form.set_custom_tip("-5");

        assert_eq!(form.tip_percentage(), Decimal::ZERO);
        assert_eq!(form.results().tip_amount, Decimal::ZERO);
        assert_eq!(form.results().total_amount, dec!(50));
    }

    #[test]
    fn activating_custom_keeps_percentage() {
        let mut form = TipForm::new();

        form.activate_custom_tip();

        assert!(form.is_custom_active());
        assert_eq!(form.tip_percentage(), dec!(15));
        assert!(!form.is_preset_active(15));
    }

    #[test]
    fn people_below_one_normalizes_to_one() {
        let mut form = TipForm::new();
        form.set_number_of_people("3");

        form.set_number_of_people("0");
        assert_eq!(form.number_of_people(), 1);

        form.set_number_of_people("-2");
        assert_eq!(form.number_of_people(), 1);
    }

    #[test]
    fn splits_between_people() {
        let mut form = TipForm::new();
        form.set_bill_amount("100");
        form.select_preset(20);
        form.set_number_of_people("4");

        assert_eq!(form.results().tip_amount, dec!(20.00));
        assert_eq!(form.results().total_amount, dec!(120.00));
        assert_eq!(form.results().amount_per_person, dec!(30.00));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = TipForm::new();
        form.set_bill_amount("87.40");
        form.set_custom_tip("30");
        form.set_number_of_people("5");

        form.reset();

        assert_eq!(form.bill_amount(), "");
        assert_eq!(form.tip_percentage(), dec!(15));
        assert_eq!(form.number_of_people(), 1);
        assert!(!form.is_custom_active());
        assert!(form.results().is_zero());
        assert_eq!(form, TipForm::new());
    }

    #[test]
    fn custom_tip_display_blank_for_presets() {
        let mut form = TipForm::new();
        form.select_preset(18);

        assert_eq!(form.custom_tip_display(), "");
    }

    #[test]
    fn custom_tip_display_shows_percentage() {
        let mut form = TipForm::new();
        form.set_custom_tip("12.50");

        assert_eq!(form.custom_tip_display(), "12.5");
    }

    #[test]
    fn custom_tip_display_hides_zero_once_bill_entered() {
        let mut form = TipForm::new();
        form.set_custom_tip("");
        assert_eq!(form.custom_tip_display(), "0");

        form.set_bill_amount("40");
        assert_eq!(form.custom_tip_display(), "");
    }

    #[test]
    fn tip_subtitle_only_when_splitting() {
        let mut form = TipForm::new();
        assert!(!form.shows_tip_subtitle());

        form.set_number_of_people("2");
        assert!(form.shows_tip_subtitle());
    }

    #[test]
    fn summary_formats_currency() {
        let mut form = TipForm::new();
        form.set_bill_amount("100");
        form.set_number_of_people("3");

        let summary = form.summary();

        assert_eq!(summary.tip, "$15.00");
        assert_eq!(summary.total, "$115.00");
        assert_eq!(summary.per_person, "$38.33");
    }

    #[test]
    fn summary_display_lists_every_amount() {
        let form = TipForm::new();

        let text = form.summary().to_string();

        assert_eq!(
            text,
            "Tip Amount:        $0.00\nTotal Amount:      $0.00\nAmount per Person: $0.00"
        );
    }
}
