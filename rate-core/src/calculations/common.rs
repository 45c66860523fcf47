//! Common utility functions for pay-package calculations.
//!
//! Shared arithmetic used across the worksheets: financial rounding and the
//! guarded operations behind the zero-divisor policy (a division whose
//! divisor may legitimately be zero yields zero instead of failing).

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rate_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(13.333)), dec!(13.33));
/// assert_eq!(round_half_up(dec!(13.335)), dec!(13.34));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Divides `numerator` by `divisor`, substituting zero when the divisor is zero.
///
/// Weekly hours, schedule days, and contract hours are all user inputs that
/// default to zero; a blank form must compute to all-zero outputs rather
/// than fail.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rate_core::calculations::common::safe_div;
///
/// assert_eq!(safe_div(dec!(630), dec!(40)), dec!(15.75));
/// assert_eq!(safe_div(dec!(630), dec!(0)), dec!(0));
/// ```
pub fn safe_div(
    numerator: Decimal,
    divisor: Decimal,
) -> Decimal {
    if divisor.is_zero() {
        Decimal::ZERO
    } else {
        numerator / divisor
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(23.344)), dec!(23.34));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(23.345)), dec!(23.35));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-23.345)), dec!(-23.35)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(23.35)), dec!(23.35));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(1), dec!(5)), dec!(5));
        assert_eq!(max(dec!(5), dec!(1)), dec!(5));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(8), dec!(8)), dec!(8));
    }

    #[test]
    fn safe_div_divides_normally() {
        assert_eq!(safe_div(dec!(400), dec!(30)), dec!(400) / dec!(30));
    }

    #[test]
    fn safe_div_substitutes_zero_for_zero_divisor() {
        assert_eq!(safe_div(dec!(1000), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn safe_div_zero_numerator_is_zero() {
        assert_eq!(safe_div(Decimal::ZERO, dec!(40)), Decimal::ZERO);
    }
}
