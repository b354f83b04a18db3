//! Sanitization of raw form text.
//!
//! Invalid user input is never reported back as an error: each field has a
//! safe fallback (no bill, a 0% tip, a single diner).

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses a string into an optional [`Decimal`].
///
/// Returns `None` for empty or whitespace-only input, or when parsing fails
/// (logs a warning on parse failure).
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    if normalize_decimal_input(s).is_empty() {
        return None;
    }
    parse_decimal(s).map_or_else(
        |e| {
            warn!(input = %s, "invalid optional decimal: {}", e);
            None
        },
        Some,
    )
}

/// Parses the bill text. Whether the amount is usable (positive) is left to
/// the calculation.
pub fn parse_bill(raw: &str) -> Option<Decimal> {
    parse_optional_decimal(raw)
}

/// Converts custom tip text to a percentage; unparsable or negative input becomes 0.
pub fn sanitize_custom_tip(raw: &str) -> Decimal {
    match parse_optional_decimal(raw) {
        Some(percent) if percent >= Decimal::ZERO => percent,
        other => {
            debug!(input = %raw, parsed = ?other, "custom tip normalized to 0");
            Decimal::ZERO
        }
    }
}

/// Converts head-count text to a number of people.
///
/// Reads the leading run of digits after an optional sign and ignores the
/// rest, so `"2.5"` is 2 and `"1e3"` is 1. No leading digits, or a count below
/// one, becomes 1; counts beyond `u32::MAX` saturate.
pub fn sanitize_people(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        debug!(input = %raw, "people count normalized to 1");
        return 1;
    }
    if negative {
        debug!(input = %raw, "people count clamped to 1");
        return 1;
    }

    // Only overflow can fail once the slice is all ASCII digits.
    let count = digits.parse::<u32>().unwrap_or(u32::MAX);
    if count == 0 {
        debug!(input = %raw, "people count clamped to 1");
        return 1;
    }
    count
}
