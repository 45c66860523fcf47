//! Pay-side worksheet for a contract pay package.
//!
//! This worksheet derives everything the candidate is paid from the schedule
//! and stipend inputs: blended stipend rates, contract hours, sick-hour
//! accrual, amortized one-time payments, orientation pay, and the weekly
//! taxable / non-taxable split.
//!
//! # Worksheet structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Daily stipend (housing + meals) and its weekly pieces (× 7) |
//! | 2    | Hourly stipend components (weekly pieces ÷ capped weekly hours) |
//! | 3    | Contract regular hours (days × weeks × 8) and overtime hours |
//! | 4    | Auto sick hours (contract regular hours ÷ 30) |
//! | 5    | One-time payments as hourly equivalents (÷ contract regular hours) |
//! | 6    | Orientation rate, total, and non-billable hourly surcharge |
//! | 7    | Overtime pay rate (base × 1.5) |
//! | 8    | Weekly taxable pay (normal / excess-hour split past 8 h/day) |
//! | 9    | Weekly stipend pay (non-taxable) and weekly gross |
//! | 10   | Blended hourly, monthly, and whole-contract gross |
//!
//! The excess-hour uplift on line 8 engages only when scheduled hours exceed
//! 8 per day AND weekly regular hours exceed 40; the nesting is intentional
//! business policy, preserved as observed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rate_core::calculations::{PayPackageInput, PayPackageWorksheet};
//! use rate_core::{OrientationType, RateConfig};
//!
//! let input = PayPackageInput {
//!     pay_rate: dec!(30.00),
//!     regular_hours: dec!(40),
//!     ot_hours: dec!(0),
//!     contract_weeks: dec!(13),
//!     housing_daily: dec!(50.00),
//!     meals_daily: dec!(40.00),
//!     orientation_type: OrientationType::NonBillable,
//!     orientation_hours: dec!(8),
//!     orientation_pay_rate: dec!(16.50),
//!     bonus_start: dec!(500.00),
//!     bonus_complete: dec!(1000.00),
//!     bcg_reimbursement: dec!(104.00),
//!     schedule_days: dec!(5),
//!     sick_hours: dec!(0),
//!     auto_sick: true,
//! };
//!
//! let worksheet = PayPackageWorksheet::new(RateConfig::default());
//! let result = worksheet.calculate(&input);
//!
//! assert_eq!(result.hourly_stipend_total, dec!(15.75));
//! assert_eq!(result.contract_regular_hours, dec!(520));
//! assert_eq!(result.auto_sick_hours, dec!(17.33));
//! assert_eq!(result.weekly_gross_pay, dec!(1830.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up, safe_div};
use crate::models::{OrientationType, RateConfig};

/// Input values for the pay-side worksheet.
///
/// One immutable snapshot of the pay-related form fields. Absent or
/// non-numeric fields have already been defaulted to zero by the form
/// reader; the worksheet itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPackageInput {
    /// Candidate's base hourly pay.
    pub pay_rate: Decimal,

    /// Weekly scheduled regular hours.
    pub regular_hours: Decimal,

    /// Weekly scheduled overtime hours.
    pub ot_hours: Decimal,

    /// Contract duration in weeks.
    pub contract_weeks: Decimal,

    /// Daily housing stipend.
    pub housing_daily: Decimal,

    /// Daily meals stipend.
    pub meals_daily: Decimal,

    /// Whether orientation hours are billable to the client.
    pub orientation_type: OrientationType,

    /// Orientation hours worked.
    pub orientation_hours: Decimal,

    /// Hourly rate entered for orientation pay.
    pub orientation_pay_rate: Decimal,

    /// One-time bonus paid at contract start.
    pub bonus_start: Decimal,

    /// One-time bonus paid at contract completion.
    pub bonus_complete: Decimal,

    /// Background-check reimbursement, amortized like a bonus but unburdened.
    pub bcg_reimbursement: Decimal,

    /// Working days per week.
    pub schedule_days: Decimal,

    /// Sick hours as entered on the form.
    pub sick_hours: Decimal,

    /// When set, sick hours are replaced with the auto-derived accrual.
    pub auto_sick: bool,
}

/// Result of the pay-side worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPackageResult {
    /// Housing + meals per stipend day.
    pub daily_stipend: Decimal,

    /// Housing stipend per week (daily × 7).
    pub weekly_housing_stipend: Decimal,

    /// Meals stipend per week (daily × 7).
    pub weekly_meals_stipend: Decimal,

    /// Total stipend per week.
    pub weekly_stipend_total: Decimal,

    /// Housing stipend blended to an hourly rate.
    pub hourly_housing_stipend: Decimal,

    /// Meals stipend blended to an hourly rate.
    pub hourly_meals_stipend: Decimal,

    /// Total blended hourly stipend (the "stipend NH" rate).
    pub hourly_stipend_total: Decimal,

    /// Regular hours over the whole contract (days × weeks × 8).
    pub contract_regular_hours: Decimal,

    /// Overtime hours over the whole contract.
    pub contract_ot_hours: Decimal,

    /// Sick hours accrued over the contract (contract regular hours ÷ 30).
    pub auto_sick_hours: Decimal,

    /// Sick hours actually in effect: the accrual when auto mode is on,
    /// the user's entry otherwise.
    pub sick_hours: Decimal,

    /// Sick pay cost spread over contract regular hours.
    pub sick_pay_hourly: Decimal,

    /// Start bonus spread over contract regular hours.
    pub bonus_start_hourly: Decimal,

    /// Completion bonus spread over contract regular hours.
    pub bonus_complete_hourly: Decimal,

    /// Reimbursement spread over contract regular hours.
    pub reimbursement_hourly: Decimal,

    /// Suggested orientation rate: blended rate when billable, the fixed
    /// house rate when not.
    pub orientation_rate: Decimal,

    /// Orientation hours × entered orientation pay rate.
    pub orientation_total: Decimal,

    /// Orientation cost spread over contract regular hours. Zero unless the
    /// orientation is non-billable and contract hours are positive.
    pub orientation_hourly: Decimal,

    /// Overtime pay rate (base × 1.5).
    pub overtime_rate: Decimal,

    /// Weekly taxable (W-2) pay.
    pub weekly_taxable_pay: Decimal,

    /// Weekly non-taxable stipend pay (regular hours × hourly stipend).
    pub weekly_stipend_pay: Decimal,

    /// Weekly gross: taxable + stipend.
    pub weekly_gross_pay: Decimal,

    /// Base pay plus hourly stipend.
    pub blended_hourly_rate: Decimal,

    /// Weekly gross extrapolated to a month.
    pub monthly_gross_pay: Decimal,

    /// Weekly gross over the whole contract.
    pub contract_gross_pay: Decimal,
}

/// Calculator for the pay-side worksheet.
#[derive(Debug, Clone)]
pub struct PayPackageWorksheet {
    config: RateConfig,
}

impl PayPackageWorksheet {
    /// Creates a new pay-side worksheet with the given business constants.
    pub fn new(config: RateConfig) -> Self {
        Self { config }
    }

    /// Calculates the complete pay-side worksheet.
    ///
    /// Infallible: every division with a possibly-zero divisor substitutes
    /// zero, so a blank form computes to an all-zero result.
    pub fn calculate(
        &self,
        input: &PayPackageInput,
    ) -> PayPackageResult {
        // Lines 1-2: stipend pieces
        let daily_stipend = round_half_up(input.housing_daily + input.meals_daily);
        let weekly_housing_stipend = self.weekly_stipend(input.housing_daily);
        let weekly_meals_stipend = self.weekly_stipend(input.meals_daily);
        let weekly_stipend_total = weekly_housing_stipend + weekly_meals_stipend;

        let divisor = self.stipend_divisor(input.regular_hours);
        let hourly_housing_stipend = self.hourly_stipend(weekly_housing_stipend, divisor);
        let hourly_meals_stipend = self.hourly_stipend(weekly_meals_stipend, divisor);
        let hourly_stipend_total = hourly_housing_stipend + hourly_meals_stipend;

        // Line 3: contract hours
        let contract_regular_hours =
            self.contract_regular_hours(input.schedule_days, input.contract_weeks);
        let contract_ot_hours = input.ot_hours * input.contract_weeks;

        // Line 4: sick accrual
        let auto_sick_hours = self.auto_sick_hours(contract_regular_hours);
        let sick_hours = if input.auto_sick {
            auto_sick_hours
        } else {
            input.sick_hours
        };

        // Line 5: hourly equivalents of one-time amounts
        let sick_pay_hourly =
            self.amortized_hourly(sick_hours * input.pay_rate, contract_regular_hours);
        let bonus_start_hourly = self.amortized_hourly(input.bonus_start, contract_regular_hours);
        let bonus_complete_hourly =
            self.amortized_hourly(input.bonus_complete, contract_regular_hours);
        let reimbursement_hourly =
            self.amortized_hourly(input.bcg_reimbursement, contract_regular_hours);

        // Line 6: orientation
        let orientation_rate =
            self.orientation_rate(input.orientation_type, input.pay_rate, hourly_stipend_total);
        let orientation_total =
            round_half_up(input.orientation_hours * input.orientation_pay_rate);
        let orientation_hourly = self.orientation_hourly(
            input.orientation_type,
            orientation_total,
            contract_regular_hours,
        );

        // Line 7: overtime rate
        let overtime_rate = self.overtime_rate(input.pay_rate);

        // Lines 8-9: weekly pay split
        let weekly_taxable_pay = self.weekly_taxable_pay(
            input.pay_rate,
            input.regular_hours,
            input.schedule_days,
            overtime_rate,
            hourly_stipend_total,
        );
        let weekly_stipend_pay = round_half_up(input.regular_hours * hourly_stipend_total);
        let weekly_gross_pay = weekly_taxable_pay + weekly_stipend_pay;

        // Line 10: package extrapolations
        let blended_hourly_rate = round_half_up(input.pay_rate + hourly_stipend_total);
        let monthly_gross_pay = round_half_up(weekly_gross_pay * self.config.weeks_in_month);
        let contract_gross_pay = round_half_up(weekly_gross_pay * input.contract_weeks);

        PayPackageResult {
            daily_stipend,
            weekly_housing_stipend,
            weekly_meals_stipend,
            weekly_stipend_total,
            hourly_housing_stipend,
            hourly_meals_stipend,
            hourly_stipend_total,
            contract_regular_hours,
            contract_ot_hours,
            auto_sick_hours,
            sick_hours,
            sick_pay_hourly,
            bonus_start_hourly,
            bonus_complete_hourly,
            reimbursement_hourly,
            orientation_rate,
            orientation_total,
            orientation_hourly,
            overtime_rate,
            weekly_taxable_pay,
            weekly_stipend_pay,
            weekly_gross_pay,
            blended_hourly_rate,
            monthly_gross_pay,
            contract_gross_pay,
        }
    }

    /// A daily stipend piece extended to a week (stipends are paid 7 days).
    fn weekly_stipend(
        &self,
        daily: Decimal,
    ) -> Decimal {
        round_half_up(daily * self.config.stipend_days_per_week)
    }

    /// Hours the weekly stipend is blended over: weekly regular hours,
    /// capped at the 40-hour threshold.
    fn stipend_divisor(
        &self,
        regular_hours: Decimal,
    ) -> Decimal {
        if regular_hours > self.config.weekly_ot_threshold {
            self.config.weekly_ot_threshold
        } else {
            regular_hours
        }
    }

    /// A weekly stipend piece as an hourly rate; zero when no hours are scheduled.
    fn hourly_stipend(
        &self,
        weekly: Decimal,
        divisor: Decimal,
    ) -> Decimal {
        round_half_up(safe_div(weekly, divisor))
    }

    /// Regular hours over the whole contract.
    fn contract_regular_hours(
        &self,
        schedule_days: Decimal,
        contract_weeks: Decimal,
    ) -> Decimal {
        schedule_days * contract_weeks * self.config.hours_per_day
    }

    /// Sick hours accrued over the contract.
    fn auto_sick_hours(
        &self,
        contract_regular_hours: Decimal,
    ) -> Decimal {
        round_half_up(safe_div(
            contract_regular_hours,
            self.config.sick_accrual_divisor,
        ))
    }

    /// A one-time amount spread over contract regular hours.
    fn amortized_hourly(
        &self,
        amount: Decimal,
        contract_regular_hours: Decimal,
    ) -> Decimal {
        round_half_up(safe_div(amount, contract_regular_hours))
    }

    /// Suggested orientation pay rate for the selected orientation type.
    fn orientation_rate(
        &self,
        orientation_type: OrientationType,
        pay_rate: Decimal,
        hourly_stipend_total: Decimal,
    ) -> Decimal {
        match orientation_type {
            OrientationType::Billable => round_half_up(pay_rate + hourly_stipend_total),
            OrientationType::NonBillable => self.config.non_billable_orientation_rate,
        }
    }

    /// Orientation cost as an hourly surcharge on the contract.
    ///
    /// Applies only to non-billable orientation, and only once contract
    /// regular hours are positive.
    fn orientation_hourly(
        &self,
        orientation_type: OrientationType,
        orientation_total: Decimal,
        contract_regular_hours: Decimal,
    ) -> Decimal {
        if orientation_type != OrientationType::NonBillable {
            return Decimal::ZERO;
        }
        round_half_up(safe_div(orientation_total, contract_regular_hours))
    }

    /// Overtime pay rate from the base rate.
    fn overtime_rate(
        &self,
        pay_rate: Decimal,
    ) -> Decimal {
        round_half_up(pay_rate * self.config.ot_multiplier)
    }

    /// Weekly taxable pay.
    ///
    /// At or below 40 weekly hours, flat hours × base rate. Above 40, hours
    /// past 8 per scheduled day are paid at overtime rate plus the hourly
    /// stipend; if the daily schedule stays within 8 hours the whole week is
    /// still paid at the base rate.
    fn weekly_taxable_pay(
        &self,
        pay_rate: Decimal,
        regular_hours: Decimal,
        schedule_days: Decimal,
        overtime_rate: Decimal,
        hourly_stipend_total: Decimal,
    ) -> Decimal {
        if regular_hours <= self.config.weekly_ot_threshold {
            return round_half_up(regular_hours * pay_rate);
        }

        let days = max(Decimal::ONE, schedule_days);
        let per_day_hours = regular_hours / days;
        if per_day_hours <= self.config.daily_ot_threshold {
            return round_half_up(regular_hours * pay_rate);
        }

        let normal_hours = days * self.config.daily_ot_threshold;
        let excess_hours = regular_hours - normal_hours;
        round_half_up(
            normal_hours * pay_rate + excess_hours * (overtime_rate + hourly_stipend_total),
        )
    }
}
