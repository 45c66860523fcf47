//! Field-value parsing and display formatting.
//!
//! Two parsing paths exist on purpose. Form reads are lenient: anything that
//! is not a number becomes zero, because a half-filled form must still
//! compute. Scenario files are strict: a malformed number there is a user
//! error worth reporting.

use rate_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Error returned when a scenario value cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Strips currency/grouping decoration: whitespace, `$`, `%`, and commas.
fn normalize_decimal_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '%'))
        .collect()
}

/// Lenient field read: empty and malformed input both become zero.
///
/// Malformed non-empty input is logged at `warn` but never surfaces as an
/// error; the form always computes.
pub fn decimal_or_zero(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %s, "non-numeric field value, using 0: {e}");
        Decimal::ZERO
    })
}

/// Strict parse for scenario values. Empty input is zero; anything else must
/// be a number.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|source| ParseDecimalError {
        input: s.to_string(),
        source,
    })
}

/// Whether a checkbox-style field value reads as checked.
pub fn checkbox_checked(s: &str) -> bool {
    matches!(s.trim(), "true" | "1" | "on" | "checked" | "yes")
}

/// Fixed-locale USD currency string: `$1,234.56`, sign leading.
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

/// A fraction as a two-decimal percentage: `0.05` → `5.00%`.
pub fn format_percent(fraction: Decimal) -> String {
    let mut pct = round_half_up(fraction * Decimal::ONE_HUNDRED);
    pct.rescale(2);
    format!("{pct}%")
}

/// A plain two-decimal number, for writes back into numeric input fields.
pub fn format_number(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded.to_string()
}
