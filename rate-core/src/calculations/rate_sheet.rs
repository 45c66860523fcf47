//! One full recalculation: form snapshot in, derived figures out.
//!
//! The rate sheet is the deterministic transform behind every form change:
//! it runs the pay-side worksheet, feeds its hourly components into the
//! bill-side worksheet, and returns both results together with the resolved
//! client fee. It has no state of its own; calling it twice with the same
//! input yields the same output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::worksheets::{
    MarginWorksheet, MarginWorksheetInput, MarginWorksheetResult, PayPackageInput,
    PayPackageResult, PayPackageWorksheet,
};
use crate::models::{Client, OrientationType, RateConfig};

/// One immutable snapshot of every input field on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSheetInput {
    pub client: Client,
    pub bill_rate: Decimal,
    pub bill_ot_add: Decimal,
    pub pay_rate: Decimal,
    pub regular_hours: Decimal,
    pub ot_hours: Decimal,
    pub contract_weeks: Decimal,
    pub housing_daily: Decimal,
    pub meals_daily: Decimal,
    pub orientation_type: OrientationType,
    pub orientation_hours: Decimal,
    pub orientation_pay_rate: Decimal,
    pub bonus_start: Decimal,
    pub bonus_complete: Decimal,
    pub bcg_reimbursement: Decimal,
    pub schedule_days: Decimal,
    pub sick_hours: Decimal,
    pub auto_sick: bool,
}

impl RateSheetInput {
    /// A blank form: defaults everywhere, every numeric field zero.
    pub fn blank() -> Self {
        Self {
            client: Client::DEFAULT,
            bill_rate: Decimal::ZERO,
            bill_ot_add: Decimal::ZERO,
            pay_rate: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            ot_hours: Decimal::ZERO,
            contract_weeks: Decimal::ZERO,
            housing_daily: Decimal::ZERO,
            meals_daily: Decimal::ZERO,
            orientation_type: OrientationType::DEFAULT,
            orientation_hours: Decimal::ZERO,
            orientation_pay_rate: Decimal::ZERO,
            bonus_start: Decimal::ZERO,
            bonus_complete: Decimal::ZERO,
            bcg_reimbursement: Decimal::ZERO,
            schedule_days: Decimal::ZERO,
            sick_hours: Decimal::ZERO,
            auto_sick: true,
        }
    }
}

/// Everything a recalculation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSheetOutputs {
    /// Fee fraction resolved from the selected client.
    pub fee: Decimal,

    /// Pay-side worksheet results.
    pub pay: PayPackageResult,

    /// Bill-side worksheet results.
    pub margin: MarginWorksheetResult,
}

/// Runs both worksheets over a form snapshot.
#[derive(Debug, Clone)]
pub struct RateSheetCalculator {
    pay: PayPackageWorksheet,
    margin: MarginWorksheet,
}

impl RateSheetCalculator {
    pub fn new(config: RateConfig) -> Self {
        Self {
            pay: PayPackageWorksheet::new(config.clone()),
            margin: MarginWorksheet::new(config),
        }
    }

    /// Recalculates every derived figure from the given snapshot.
    pub fn recalculate(
        &self,
        input: &RateSheetInput,
    ) -> RateSheetOutputs {
        debug!(
            client = input.client.as_str(),
            bill_rate = %input.bill_rate,
            pay_rate = %input.pay_rate,
            "recalculating rate sheet"
        );

        let fee = input.client.fee();

        let pay = self.pay.calculate(&PayPackageInput {
            pay_rate: input.pay_rate,
            regular_hours: input.regular_hours,
            ot_hours: input.ot_hours,
            contract_weeks: input.contract_weeks,
            housing_daily: input.housing_daily,
            meals_daily: input.meals_daily,
            orientation_type: input.orientation_type,
            orientation_hours: input.orientation_hours,
            orientation_pay_rate: input.orientation_pay_rate,
            bonus_start: input.bonus_start,
            bonus_complete: input.bonus_complete,
            bcg_reimbursement: input.bcg_reimbursement,
            schedule_days: input.schedule_days,
            sick_hours: input.sick_hours,
            auto_sick: input.auto_sick,
        });

        let margin = self.margin.calculate(&MarginWorksheetInput {
            bill_rate: input.bill_rate,
            bill_ot_add: input.bill_ot_add,
            fee,
            pay_rate: input.pay_rate,
            regular_hours: input.regular_hours,
            ot_hours: input.ot_hours,
            contract_weeks: input.contract_weeks,
            hourly_stipend_total: pay.hourly_stipend_total,
            reimbursement_hourly: pay.reimbursement_hourly,
            bonus_start_hourly: pay.bonus_start_hourly,
            bonus_complete_hourly: pay.bonus_complete_hourly,
            orientation_hourly: pay.orientation_hourly,
        });

        RateSheetOutputs { fee, pay, margin }
    }
}
