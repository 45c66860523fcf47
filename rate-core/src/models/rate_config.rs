use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating a [`RateConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateConfigError {
    /// The burden multiplier must be at least 1 (employer costs add to pay).
    #[error("burden multiplier must be at least 1, got {0}")]
    InvalidBurden(Decimal),

    /// The overtime multiplier must be at least 1.
    #[error("overtime multiplier must be at least 1, got {0}")]
    InvalidOtMultiplier(Decimal),

    /// Weeks per month must be positive.
    #[error("weeks per month must be positive, got {0}")]
    InvalidWeeksInMonth(Decimal),

    /// The weekly overtime threshold must be positive.
    #[error("weekly overtime threshold must be positive, got {0}")]
    InvalidWeeklyOtThreshold(Decimal),

    /// The daily overtime threshold must be positive.
    #[error("daily overtime threshold must be positive, got {0}")]
    InvalidDailyOtThreshold(Decimal),

    /// The sick-hours accrual divisor must be positive.
    #[error("sick accrual divisor must be positive, got {0}")]
    InvalidSickAccrualDivisor(Decimal),

    /// The margin gauge target must be positive.
    #[error("margin target must be positive, got {0}")]
    InvalidMarginTarget(Decimal),
}

/// Business constants for pay-package calculations.
///
/// These are fixed policy values, not per-session state. [`Default`] yields
/// the production schedule; `validate` guards against a nonsensical override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Multiplier approximating employer-side costs on taxable pay.
    pub burden: Decimal,

    /// Overtime premium applied to the base pay rate.
    pub ot_multiplier: Decimal,

    /// Weeks used to extrapolate weekly figures to monthly ones.
    pub weeks_in_month: Decimal,

    /// Weekly hours above which the overtime uplift can engage.
    pub weekly_ot_threshold: Decimal,

    /// Daily hours above which worked hours count as excess.
    pub daily_ot_threshold: Decimal,

    /// Scheduled hours per working day when deriving contract hours.
    pub hours_per_day: Decimal,

    /// Days per week a daily stipend is paid for.
    pub stipend_days_per_week: Decimal,

    /// Contract regular hours per accrued sick hour.
    pub sick_accrual_divisor: Decimal,

    /// Fixed hourly rate for non-billable orientation.
    pub non_billable_orientation_rate: Decimal,

    /// Hourly margin at which the gauge reads full.
    pub margin_target: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            burden: Decimal::new(123, 2),
            ot_multiplier: Decimal::new(15, 1),
            weeks_in_month: Decimal::from(4),
            weekly_ot_threshold: Decimal::from(40),
            daily_ot_threshold: Decimal::from(8),
            hours_per_day: Decimal::from(8),
            stipend_days_per_week: Decimal::from(7),
            sick_accrual_divisor: Decimal::from(30),
            non_billable_orientation_rate: Decimal::new(1650, 2),
            margin_target: Decimal::from(5),
        }
    }
}

impl RateConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`RateConfigError`] if any value is outside its valid range.
    pub fn validate(&self) -> Result<(), RateConfigError> {
        if self.burden < Decimal::ONE {
            return Err(RateConfigError::InvalidBurden(self.burden));
        }
        if self.ot_multiplier < Decimal::ONE {
            return Err(RateConfigError::InvalidOtMultiplier(self.ot_multiplier));
        }
        if self.weeks_in_month <= Decimal::ZERO {
            return Err(RateConfigError::InvalidWeeksInMonth(self.weeks_in_month));
        }
        if self.weekly_ot_threshold <= Decimal::ZERO {
            return Err(RateConfigError::InvalidWeeklyOtThreshold(
                self.weekly_ot_threshold,
            ));
        }
        if self.daily_ot_threshold <= Decimal::ZERO {
            return Err(RateConfigError::InvalidDailyOtThreshold(
                self.daily_ot_threshold,
            ));
        }
        if self.sick_accrual_divisor <= Decimal::ZERO {
            return Err(RateConfigError::InvalidSickAccrualDivisor(
                self.sick_accrual_divisor,
            ));
        }
        if self.margin_target <= Decimal::ZERO {
            return Err(RateConfigError::InvalidMarginTarget(self.margin_target));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RateConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_burden_and_targets() {
        let config = RateConfig::default();

        assert_eq!(config.burden, dec!(1.23));
        assert_eq!(config.ot_multiplier, dec!(1.5));
        assert_eq!(config.non_billable_orientation_rate, dec!(16.50));
        assert_eq!(config.margin_target, dec!(5));
    }

    #[test]
    fn validate_rejects_sub_one_burden() {
        let config = RateConfig {
            burden: dec!(0.9),
            ..RateConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(RateConfigError::InvalidBurden(dec!(0.9)))
        );
    }

    #[test]
    fn validate_rejects_zero_sick_divisor() {
        let config = RateConfig {
            sick_accrual_divisor: Decimal::ZERO,
            ..RateConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(RateConfigError::InvalidSickAccrualDivisor(Decimal::ZERO))
        );
    }

    #[test]
    fn validate_rejects_zero_margin_target() {
        let config = RateConfig {
            margin_target: Decimal::ZERO,
            ..RateConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(RateConfigError::InvalidMarginTarget(Decimal::ZERO))
        );
    }
}
