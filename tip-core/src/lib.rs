//! Domain logic for splitting a restaurant bill.
//!
//! Nothing in this crate depends on a UI toolkit: the form state machine in
//! [`form`] can be driven by the desktop front end, the command line, or tests.

pub mod calculations;
pub mod form;
pub mod models;
pub mod parse;

pub use calculations::{calculate_split, format_currency, round_half_up};
pub use form::{SplitSummary, TipForm};
pub use models::*;
