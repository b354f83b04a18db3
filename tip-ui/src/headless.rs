//! One-shot calculation from command-line values, without opening a window.

use tip_core::{TIP_PRESETS, TipForm};
use tracing::debug;

/// Raw values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitRequest {
    pub bill: String,
    pub tip: Option<String>,
    pub people: Option<String>,
}

impl SplitRequest {
    /// Replays the request through the same handlers the window uses.
    ///
    /// A tip that names a preset exactly selects that preset; anything else is
    /// treated as custom input and sanitized the same way. A trailing `%` is
    /// accepted.
    pub fn to_form(&self) -> TipForm {
        let mut form = TipForm::new();
        form.set_bill_amount(self.bill.as_str());

        if let Some(tip) = self.tip.as_deref().map(strip_percent_sign) {
            match preset_for(tip) {
                Some(preset) => form.select_preset(preset),
                None => form.set_custom_tip(tip),
            }
        }

        if let Some(people) = &self.people {
            form.set_number_of_people(people);
        }

        debug!(input = ?form.input(), "headless request applied");
        form
    }
}

fn strip_percent_sign(tip: &str) -> &str {
    tip.trim().trim_end_matches('%').trim_end()
}

fn preset_for(tip: &str) -> Option<u32> {
    let percent: u32 = tip.parse().ok()?;
    TIP_PRESETS.contains(&percent).then_some(percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preset_for_matches_presets_only() {
        assert_eq!(preset_for("20"), Some(20));
        assert_eq!(preset_for(strip_percent_sign(" 18% ")), Some(18));
        assert_eq!(preset_for("17"), None);
        assert_eq!(preset_for("12.5"), None);
    }
}
