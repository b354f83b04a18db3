use serde::{Deserialize, Serialize};

/// Quick-select tip percentages, in display order.
pub const TIP_PRESETS: [u32; 5] = [10, 15, 18, 20, 25];

/// Tip percentage selected on a fresh or reset form.
pub const DEFAULT_TIP_PERCENTAGE: u32 = 15;

/// Head count on a fresh or reset form.
pub const DEFAULT_NUMBER_OF_PEOPLE: u32 = 1;

/// Where the current tip percentage came from.
///
/// Exactly one source is active at a time; choosing a preset clears the custom
/// flag and editing the custom field sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TipSource {
    #[default]
    Preset,
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tip_is_one_of_the_presets() {
        assert!(TIP_PRESETS.contains(&DEFAULT_TIP_PERCENTAGE));
    }

    #[test]
    fn default_source_is_preset() {
        assert_eq!(TipSource::default(), TipSource::Preset);
    }
}
