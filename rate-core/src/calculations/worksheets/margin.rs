//! Bill-side worksheet: after-fee rates, billing totals, and gross margin.
//!
//! Consumes the hourly figures produced by the pay-side worksheet
//! ([`super::pay_package`]) together with the client's bill rates and fee,
//! and derives what the agency bills and what it keeps.
//!
//! # Worksheet structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | After-fee bill rates, regular and overtime |
//! | 2    | Billing per week, month, and whole contract |
//! | 3    | Hourly margin: after-fee rate minus all pay components |
//! | 4    | Net margin per week, month, and whole contract |
//! | 5    | Gauge fill against the margin target, and its color band |
//!
//! On line 3, W-2 pay, one-time bonuses, and the non-billable orientation
//! surcharge are burdened (× 1.23); stipends and reimbursements pass through
//! unburdened. On line 2 the monthly figure scales only the regular-hours
//! term by four — preserved as observed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rate_core::calculations::{MarginWorksheet, MarginWorksheetInput};
//! use rate_core::RateConfig;
//!
//! let input = MarginWorksheetInput {
//!     bill_rate: dec!(80.00),
//!     bill_ot_add: dec!(0),
//!     fee: dec!(0.05),
//!     pay_rate: dec!(30.00),
//!     regular_hours: dec!(40),
//!     ot_hours: dec!(0),
//!     contract_weeks: dec!(13),
//!     hourly_stipend_total: dec!(15.75),
//!     reimbursement_hourly: dec!(0),
//!     bonus_start_hourly: dec!(0),
//!     bonus_complete_hourly: dec!(0),
//!     orientation_hourly: dec!(0),
//! };
//!
//! let worksheet = MarginWorksheet::new(RateConfig::default());
//! let result = worksheet.calculate(&input);
//!
//! assert_eq!(result.after_fee_regular, dec!(76.00));
//! assert_eq!(result.hourly_margin, dec!(23.35));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{round_half_up, safe_div};
use crate::models::RateConfig;

/// Input values for the bill-side worksheet.
///
/// The hourly pay components come from the pay-side worksheet result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginWorksheetInput {
    /// Client bill rate for regular hours.
    pub bill_rate: Decimal,

    /// Addition to the bill rate for overtime hours.
    pub bill_ot_add: Decimal,

    /// Client fee fraction withheld from billed rates.
    pub fee: Decimal,

    /// Candidate's base hourly pay.
    pub pay_rate: Decimal,

    /// Weekly scheduled regular hours.
    pub regular_hours: Decimal,

    /// Weekly scheduled overtime hours.
    pub ot_hours: Decimal,

    /// Contract duration in weeks.
    pub contract_weeks: Decimal,

    /// Blended hourly stipend (unburdened pay component).
    pub hourly_stipend_total: Decimal,

    /// Amortized reimbursement (unburdened pay component).
    pub reimbursement_hourly: Decimal,

    /// Amortized start bonus (burdened pay component).
    pub bonus_start_hourly: Decimal,

    /// Amortized completion bonus (burdened pay component).
    pub bonus_complete_hourly: Decimal,

    /// Non-billable orientation surcharge (burdened pay component).
    pub orientation_hourly: Decimal,
}

/// Where the hourly margin sits relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginBand {
    /// Margin meets or exceeds the target.
    Green,
    /// Margin falls short of the target.
    Red,
}

impl MarginBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// Result of the bill-side worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginWorksheetResult {
    /// Bill rate after the client fee.
    pub after_fee_regular: Decimal,

    /// Overtime bill rate after the client fee.
    pub after_fee_ot: Decimal,

    /// Client billing per week.
    pub billing_weekly: Decimal,

    /// Client billing per month (regular term × 4, overtime term unscaled).
    pub billing_monthly: Decimal,

    /// Client billing over the whole contract.
    pub billing_contract: Decimal,

    /// After-fee rate minus all pay components, per regular hour.
    pub hourly_margin: Decimal,

    /// Hourly margin × regular hours.
    pub net_margin_weekly: Decimal,

    /// Weekly net margin × weeks in a month.
    pub net_margin_monthly: Decimal,

    /// Weekly net margin × contract weeks.
    pub net_margin_contract: Decimal,

    /// Gauge fill fraction in [0, 1]: hourly margin over the target.
    pub gauge_fill: Decimal,

    /// Gauge color band for the indicator.
    pub margin_band: MarginBand,
}

/// Calculator for the bill-side worksheet.
#[derive(Debug, Clone)]
pub struct MarginWorksheet {
    config: RateConfig,
}

impl MarginWorksheet {
    /// Creates a new bill-side worksheet with the given business constants.
    pub fn new(config: RateConfig) -> Self {
        Self { config }
    }

    /// Calculates the complete bill-side worksheet. Infallible.
    pub fn calculate(
        &self,
        input: &MarginWorksheetInput,
    ) -> MarginWorksheetResult {
        // Line 1: after-fee rates
        let after_fee_regular = self.after_fee_rate(input.bill_rate, input.fee);
        let after_fee_ot = self.after_fee_rate(input.bill_rate + input.bill_ot_add, input.fee);

        // Line 2: billing
        let billing_weekly = self.billing_weekly(input, after_fee_regular, after_fee_ot);
        let billing_monthly = self.billing_monthly(input, after_fee_regular, after_fee_ot);
        let billing_contract = round_half_up(billing_weekly * input.contract_weeks);

        // Line 3: hourly margin
        let hourly_margin = self.hourly_margin(input, after_fee_regular);

        // Line 4: net margin
        let net_margin_weekly = round_half_up(hourly_margin * input.regular_hours);
        let net_margin_monthly = round_half_up(net_margin_weekly * self.config.weeks_in_month);
        let net_margin_contract = round_half_up(net_margin_weekly * input.contract_weeks);

        // Line 5: gauge
        let gauge_fill = self.gauge_fill(hourly_margin);
        let margin_band = self.margin_band(hourly_margin);

        MarginWorksheetResult {
            after_fee_regular,
            after_fee_ot,
            billing_weekly,
            billing_monthly,
            billing_contract,
            hourly_margin,
            net_margin_weekly,
            net_margin_monthly,
            net_margin_contract,
            gauge_fill,
            margin_band,
        }
    }

    /// A bill rate with the client fee taken out.
    fn after_fee_rate(
        &self,
        rate: Decimal,
        fee: Decimal,
    ) -> Decimal {
        round_half_up(rate * (Decimal::ONE - fee))
    }

    /// Weekly billing: regular and overtime hours at their after-fee rates.
    fn billing_weekly(
        &self,
        input: &MarginWorksheetInput,
        after_fee_regular: Decimal,
        after_fee_ot: Decimal,
    ) -> Decimal {
        round_half_up(
            input.regular_hours * after_fee_regular + input.ot_hours * after_fee_ot,
        )
    }

    /// Monthly billing. Only the regular-hours term is scaled to the month;
    /// the overtime term stays weekly — preserved as observed.
    fn billing_monthly(
        &self,
        input: &MarginWorksheetInput,
        after_fee_regular: Decimal,
        after_fee_ot: Decimal,
    ) -> Decimal {
        round_half_up(
            self.config.weeks_in_month * input.regular_hours * after_fee_regular
                + input.ot_hours * after_fee_ot,
        )
    }

    /// Hourly margin: the after-fee rate minus burdened W-2 pay, unburdened
    /// stipend and reimbursement, burdened one-time bonuses, and the
    /// burdened non-billable orientation surcharge.
    fn hourly_margin(
        &self,
        input: &MarginWorksheetInput,
        after_fee_regular: Decimal,
    ) -> Decimal {
        let burdened_pay = input.pay_rate * self.config.burden;
        let unburdened = input.hourly_stipend_total + input.reimbursement_hourly;
        let burdened_bonuses =
            (input.bonus_start_hourly + input.bonus_complete_hourly) * self.config.burden;
        let burdened_orientation = input.orientation_hourly * self.config.burden;

        round_half_up(
            after_fee_regular - (burdened_pay + unburdened + burdened_bonuses + burdened_orientation),
        )
    }

    /// Gauge fill fraction, clamped to [0, 1].
    fn gauge_fill(
        &self,
        hourly_margin: Decimal,
    ) -> Decimal {
        let fill = safe_div(hourly_margin, self.config.margin_target);
        round_half_up(fill.clamp(Decimal::ZERO, Decimal::ONE))
    }

    /// Gauge color for the indicator.
    fn margin_band(
        &self,
        hourly_margin: Decimal,
    ) -> MarginBand {
        if hourly_margin >= self.config.margin_target {
            MarginBand::Green
        } else {
            MarginBand::Red
        }
    }
}
