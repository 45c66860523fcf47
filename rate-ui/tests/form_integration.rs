//! End-to-end form scenarios: a host document, the controller, and the
//! calculation working together the way the live form does.

use pretty_assertions::assert_eq;

use rate_ui::controller::RateController;
use rate_ui::document::{FormDocument, MemoryForm};
use rate_ui::fields;

fn init_form() -> (RateController, MemoryForm) {
    let controller = RateController::default();
    let mut form = MemoryForm::with_standard_fields();
    controller.init(&mut form);
    (controller, form)
}

/// Types a value into a field and fires its change event.
fn enter(
    controller: &RateController,
    form: &mut MemoryForm,
    field: &str,
    value: &str,
) {
    form.set(field, value);
    controller.field_changed(form, field);
}

fn standard_package(
    controller: &RateController,
    form: &mut MemoryForm,
) {
    enter(controller, form, fields::CLIENT, "AMN");
    enter(controller, form, fields::BILL_RATE, "80");
    enter(controller, form, fields::PAY_RATE, "30");
    enter(controller, form, fields::REGULAR_HOURS, "40");
    enter(controller, form, fields::CONTRACT_WEEKS, "13");
    enter(controller, form, fields::HOUSING_DAILY, "50");
    enter(controller, form, fields::MEALS_DAILY, "40");
    enter(controller, form, fields::SCHEDULE_DAYS, "5");
}

#[test]
fn fee_lookup_and_after_fee_rate() {
    let (controller, mut form) = init_form();

    standard_package(&controller, &mut form);

    assert_eq!(form.get(fields::FEE_DISPLAY), Some("5.00%".to_string()));
    assert_eq!(form.get(fields::AFTER_FEE_RATE), Some("$76.00".to_string()));
    assert_eq!(
        form.get(fields::CLIENT_TITLE),
        Some("AMN Healthcare".to_string())
    );
}

#[test]
fn margin_example_package() {
    let (controller, mut form) = init_form();

    standard_package(&controller, &mut form);

    assert_eq!(form.get(fields::STIPEND_HOURLY), Some("$15.75".to_string()));
    assert_eq!(form.get(fields::MARGIN_HOURLY), Some("$23.35".to_string()));
    assert_eq!(form.get(fields::MARGIN_GAUGE), Some("100.00%".to_string()));
    assert_eq!(
        form.get(fields::MARGIN_GAUGE_COLOR),
        Some("green".to_string())
    );
}

#[test]
fn overtime_rate_follows_pay_rate() {
    let (controller, mut form) = init_form();

    enter(&controller, &mut form, fields::PAY_RATE, "30");
    assert_eq!(form.get(fields::OT_RATE), Some("45.00".to_string()));

    enter(&controller, &mut form, fields::PAY_RATE, "33.47");
    // 33.47 × 1.5 = 50.205
    assert_eq!(form.get(fields::OT_RATE), Some("50.21".to_string()));
}

#[test]
fn auto_sick_hours_follow_contract_hours() {
    let (controller, mut form) = init_form();

    enter(&controller, &mut form, fields::SCHEDULE_DAYS, "5");
    enter(&controller, &mut form, fields::CONTRACT_WEEKS, "10");

    // 5 × 10 × 8 ÷ 30
    assert_eq!(form.get(fields::SICK_HOURS), Some("13.33".to_string()));
}

#[test]
fn manual_sick_hours_survive_recalculation() {
    let (controller, mut form) = init_form();
    enter(&controller, &mut form, fields::SCHEDULE_DAYS, "5");
    enter(&controller, &mut form, fields::CONTRACT_WEEKS, "10");

    enter(&controller, &mut form, fields::AUTO_SICK_HOURS, "false");
    enter(&controller, &mut form, fields::SICK_HOURS, "20");
    enter(&controller, &mut form, fields::BILL_RATE, "75");

    assert_eq!(form.get(fields::SICK_HOURS), Some("20".to_string()));
}

#[test]
fn rechecking_auto_sick_overwrites_manual_value() {
    let (controller, mut form) = init_form();
    enter(&controller, &mut form, fields::SCHEDULE_DAYS, "5");
    enter(&controller, &mut form, fields::CONTRACT_WEEKS, "10");
    enter(&controller, &mut form, fields::AUTO_SICK_HOURS, "false");
    enter(&controller, &mut form, fields::SICK_HOURS, "20");

    enter(&controller, &mut form, fields::AUTO_SICK_HOURS, "true");

    assert_eq!(form.get(fields::SICK_HOURS), Some("13.33".to_string()));
}

#[test]
fn reset_restores_form_defaults() {
    let (controller, mut form) = init_form();
    standard_package(&controller, &mut form);
    enter(&controller, &mut form, fields::ORIENTATION_HOURS, "8");
    enter(&controller, &mut form, fields::AUTO_SICK_HOURS, "false");

    controller.reset(&mut form);

    assert_eq!(form.get(fields::CLIENT), Some("SimpliFI".to_string()));
    assert_eq!(
        form.get(fields::ORIENTATION_TYPE),
        Some("Non Billable".to_string())
    );
    assert_eq!(
        form.get(fields::ORIENTATION_PAY_RATE),
        Some("16.50".to_string())
    );
    assert_eq!(form.get(fields::AUTO_SICK_HOURS), Some("true".to_string()));
    assert_eq!(form.get(fields::BILL_RATE), Some("0".to_string()));
    assert_eq!(form.get(fields::REGULAR_HOURS), Some("0".to_string()));
    assert_eq!(form.get(fields::HOUSING_DAILY), Some("0".to_string()));
    // Preserved: orientation hours and both pay rates
    assert_eq!(form.get(fields::ORIENTATION_HOURS), Some("8".to_string()));
    assert_eq!(form.get(fields::PAY_RATE), Some("30".to_string()));
    assert_eq!(form.get(fields::OT_RATE), Some("45.00".to_string()));
    // And the fee display follows the default client again
    assert_eq!(form.get(fields::FEE_DISPLAY), Some("2.25%".to_string()));
}

#[test]
fn recalculation_is_idempotent_over_the_document() {
    let (controller, mut form) = init_form();
    standard_package(&controller, &mut form);

    controller.recalculate(&mut form);
    let first: Vec<(String, Option<String>)> = fields::STANDARD_FIELDS
        .iter()
        .map(|f| (f.to_string(), form.get(f)))
        .collect();

    controller.recalculate(&mut form);
    let second: Vec<(String, Option<String>)> = fields::STANDARD_FIELDS
        .iter()
        .map(|f| (f.to_string(), form.get(f)))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn missing_output_fields_are_skipped() {
    let controller = RateController::default();
    let mut form = MemoryForm::with_standard_fields();
    form.remove_field(fields::MARGIN_HOURLY);
    form.remove_field(fields::MARGIN_GAUGE);
    form.remove_field(fields::SICK_HOURS);
    controller.init(&mut form);

    standard_package(&controller, &mut form);

    assert_eq!(form.get(fields::MARGIN_HOURLY), None);
    assert_eq!(form.get(fields::AFTER_FEE_RATE), Some("$76.00".to_string()));
    assert_eq!(
        form.get(fields::BILLING_WEEKLY),
        Some("$3,040.00".to_string())
    );
}

#[test]
fn bare_document_computes_without_output_fields() {
    // A host with only a handful of inputs: everything else is skipped.
    let controller = RateController::default();
    let mut form = MemoryForm::empty();
    form.add_field(fields::BILL_RATE);
    form.add_field(fields::PAY_RATE);
    controller.init(&mut form);

    form.set(fields::BILL_RATE, "80");
    let outputs = controller.field_changed(&mut form, fields::BILL_RATE);

    // Default client fee applies even though no display fields exist.
    assert_eq!(
        outputs.margin.after_fee_regular,
        rust_decimal::Decimal::new(7820, 2)
    );
}
