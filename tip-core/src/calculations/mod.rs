//! Bill-splitting arithmetic.
//!
//! [`split`] holds the pure calculation; [`common`] has the rounding and
//! formatting helpers shared with presentation code.

pub mod common;
pub mod split;

pub use common::{format_currency, round_half_up};
pub use split::calculate_split;
