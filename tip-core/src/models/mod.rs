mod split;
mod tip;

pub use split::{SplitInput, SplitResult};
pub use tip::{DEFAULT_NUMBER_OF_PEOPLE, DEFAULT_TIP_PERCENTAGE, TIP_PRESETS, TipSource};
