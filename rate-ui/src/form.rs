//! Reading a snapshot from, and applying results to, a host document.
//!
//! `read_input` collects every input field into one immutable
//! [`RateSheetInput`]; absent or non-numeric fields default silently.
//! `write_outputs` applies a [`RateSheetOutputs`] to the display fields in
//! one pass; absent fields are skipped without error or log line.

use rate_core::{Client, OrientationType, RateSheetInput, RateSheetOutputs};
use rust_decimal::Decimal;

use crate::document::FormDocument;
use crate::fields;
use crate::utils::{
    checkbox_checked, decimal_or_zero, format_currency, format_number, format_percent,
};

fn numeric(
    doc: &dyn FormDocument,
    field: &str,
) -> Decimal {
    doc.get(field)
        .map(|value| decimal_or_zero(&value))
        .unwrap_or(Decimal::ZERO)
}

fn checkbox(
    doc: &dyn FormDocument,
    field: &str,
    default: bool,
) -> bool {
    match doc.get(field) {
        Some(value) if !value.trim().is_empty() => checkbox_checked(&value),
        _ => default,
    }
}

/// Collects the current form state into a calculation snapshot.
pub fn read_input(doc: &dyn FormDocument) -> RateSheetInput {
    let client = doc
        .get(fields::CLIENT)
        .as_deref()
        .and_then(Client::parse)
        .unwrap_or(Client::DEFAULT);
    let orientation_type = doc
        .get(fields::ORIENTATION_TYPE)
        .as_deref()
        .and_then(OrientationType::parse)
        .unwrap_or(OrientationType::DEFAULT);

    RateSheetInput {
        client,
        bill_rate: numeric(doc, fields::BILL_RATE),
        bill_ot_add: numeric(doc, fields::BILL_OT_ADD),
        pay_rate: numeric(doc, fields::PAY_RATE),
        regular_hours: numeric(doc, fields::REGULAR_HOURS),
        ot_hours: numeric(doc, fields::OT_HOURS),
        contract_weeks: numeric(doc, fields::CONTRACT_WEEKS),
        housing_daily: numeric(doc, fields::HOUSING_DAILY),
        meals_daily: numeric(doc, fields::MEALS_DAILY),
        orientation_type,
        orientation_hours: numeric(doc, fields::ORIENTATION_HOURS),
        orientation_pay_rate: numeric(doc, fields::ORIENTATION_PAY_RATE),
        bonus_start: numeric(doc, fields::BONUS_START),
        bonus_complete: numeric(doc, fields::BONUS_COMPLETE),
        bcg_reimbursement: numeric(doc, fields::BCG_REIMBURSEMENT),
        schedule_days: numeric(doc, fields::SCHEDULE_DAYS),
        sick_hours: numeric(doc, fields::SICK_HOURS),
        auto_sick: checkbox(doc, fields::AUTO_SICK_HOURS, true),
    }
}

/// Applies one recalculation to the display fields.
///
/// Every write goes through [`FormDocument::set`], which skips fields the
/// host does not carry; a partial document updates whatever it has.
pub fn write_outputs(
    doc: &mut dyn FormDocument,
    input: &RateSheetInput,
    outputs: &RateSheetOutputs,
) {
    let pay = &outputs.pay;
    let margin = &outputs.margin;

    doc.set(fields::FEE_DISPLAY, &format_percent(outputs.fee));
    doc.set(fields::CLIENT_TITLE, input.client.display_name());

    doc.set(
        fields::AFTER_FEE_RATE,
        &format_currency(margin.after_fee_regular),
    );
    doc.set(
        fields::AFTER_FEE_OT_RATE,
        &format_currency(margin.after_fee_ot),
    );

    doc.set(fields::STIPEND_DAILY, &format_currency(pay.daily_stipend));
    doc.set(
        fields::STIPEND_WEEKLY,
        &format_currency(pay.weekly_stipend_total),
    );
    doc.set(
        fields::STIPEND_HOUSING_HOURLY,
        &format_currency(pay.hourly_housing_stipend),
    );
    doc.set(
        fields::STIPEND_MEALS_HOURLY,
        &format_currency(pay.hourly_meals_stipend),
    );
    doc.set(
        fields::STIPEND_HOURLY,
        &format_currency(pay.hourly_stipend_total),
    );

    doc.set(
        fields::TAXABLE_WEEKLY,
        &format_currency(pay.weekly_taxable_pay),
    );
    doc.set(
        fields::GROSS_HOURLY,
        &format_currency(pay.blended_hourly_rate),
    );
    doc.set(fields::GROSS_WEEKLY, &format_currency(pay.weekly_gross_pay));
    doc.set(
        fields::GROSS_MONTHLY,
        &format_currency(pay.monthly_gross_pay),
    );
    doc.set(
        fields::GROSS_CONTRACT,
        &format_currency(pay.contract_gross_pay),
    );

    doc.set(fields::MARGIN_HOURLY, &format_currency(margin.hourly_margin));
    doc.set(
        fields::MARGIN_WEEKLY,
        &format_currency(margin.net_margin_weekly),
    );
    doc.set(
        fields::MARGIN_MONTHLY,
        &format_currency(margin.net_margin_monthly),
    );
    doc.set(
        fields::MARGIN_CONTRACT,
        &format_currency(margin.net_margin_contract),
    );

    doc.set(
        fields::BILLING_WEEKLY,
        &format_currency(margin.billing_weekly),
    );
    doc.set(
        fields::BILLING_MONTHLY,
        &format_currency(margin.billing_monthly),
    );
    doc.set(
        fields::BILLING_CONTRACT,
        &format_currency(margin.billing_contract),
    );

    doc.set(
        fields::ORIENTATION_RATE,
        &format_currency(pay.orientation_rate),
    );
    doc.set(
        fields::ORIENTATION_TOTAL,
        &format_currency(pay.orientation_total),
    );
    doc.set(
        fields::ORIENTATION_HOURLY,
        &format_currency(pay.orientation_hourly),
    );

    doc.set(
        fields::BONUS_START_HOURLY,
        &format_currency(pay.bonus_start_hourly),
    );
    doc.set(
        fields::BONUS_COMPLETE_HOURLY,
        &format_currency(pay.bonus_complete_hourly),
    );
    doc.set(
        fields::REIMBURSEMENT_HOURLY,
        &format_currency(pay.reimbursement_hourly),
    );
    doc.set(
        fields::SICK_PAY_HOURLY,
        &format_currency(pay.sick_pay_hourly),
    );

    doc.set(fields::MARGIN_GAUGE, &format_percent(margin.gauge_fill));
    doc.set(fields::MARGIN_GAUGE_COLOR, margin.margin_band.as_str());

    // The sick-hours input is the one field a recalculation may write:
    // while auto mode is on, the accrued value overwrites it.
    if input.auto_sick {
        doc.set(fields::SICK_HOURS, &format_number(pay.sick_hours));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rate_core::{RateConfig, RateSheetCalculator};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::document::MemoryForm;

    fn filled_form() -> MemoryForm {
        let mut form = MemoryForm::with_standard_fields();
        form.set(fields::CLIENT, "AMN");
        form.set(fields::BILL_RATE, "80");
        form.set(fields::PAY_RATE, "30");
        form.set(fields::REGULAR_HOURS, "40");
        form.set(fields::CONTRACT_WEEKS, "13");
        form.set(fields::HOUSING_DAILY, "50");
        form.set(fields::MEALS_DAILY, "40");
        form.set(fields::SCHEDULE_DAYS, "5");
        form
    }

    #[test]
    fn read_input_collects_fields() {
        let input = read_input(&filled_form());

        assert_eq!(input.client, Client::Amn);
        assert_eq!(input.bill_rate, dec!(80));
        assert_eq!(input.regular_hours, dec!(40));
        assert!(input.auto_sick);
    }

    #[test]
    fn read_input_defaults_missing_and_blank_fields() {
        let input = read_input(&MemoryForm::empty());

        assert_eq!(input.client, Client::SimpliFi);
        assert_eq!(input.orientation_type, OrientationType::NonBillable);
        assert_eq!(input.bill_rate, Decimal::ZERO);
        assert!(input.auto_sick);
    }

    #[test]
    fn read_input_defaults_unknown_client() {
        let mut form = filled_form();
        form.set(fields::CLIENT, "Acme");

        let input = read_input(&form);

        assert_eq!(input.client, Client::SimpliFi);
    }

    #[test]
    fn write_outputs_formats_currency_and_percent() {
        let mut form = filled_form();
        let input = read_input(&form);
        let outputs = RateSheetCalculator::new(RateConfig::default()).recalculate(&input);

        write_outputs(&mut form, &input, &outputs);

        assert_eq!(form.get(fields::FEE_DISPLAY), Some("5.00%".to_string()));
        assert_eq!(form.get(fields::AFTER_FEE_RATE), Some("$76.00".to_string()));
        assert_eq!(form.get(fields::MARGIN_HOURLY), Some("$23.35".to_string()));
        assert_eq!(
            form.get(fields::BILLING_WEEKLY),
            Some("$3,040.00".to_string())
        );
        assert_eq!(
            form.get(fields::CLIENT_TITLE),
            Some("AMN Healthcare".to_string())
        );
        assert_eq!(form.get(fields::MARGIN_GAUGE_COLOR), Some("green".to_string()));
    }

    #[test]
    fn write_outputs_overwrites_sick_hours_in_auto_mode() {
        let mut form = filled_form();
        let input = read_input(&form);
        let outputs = RateSheetCalculator::new(RateConfig::default()).recalculate(&input);

        write_outputs(&mut form, &input, &outputs);

        // 5 × 13 × 8 ÷ 30
        assert_eq!(form.get(fields::SICK_HOURS), Some("17.33".to_string()));
    }

    #[test]
    fn write_outputs_skips_missing_fields() {
        let mut form = filled_form();
        form.remove_field(fields::MARGIN_HOURLY);
        let input = read_input(&form);
        let outputs = RateSheetCalculator::new(RateConfig::default()).recalculate(&input);

        write_outputs(&mut form, &input, &outputs);

        assert_eq!(form.get(fields::MARGIN_HOURLY), None);
        assert_eq!(form.get(fields::AFTER_FEE_RATE), Some("$76.00".to_string()));
    }
}
