//! Stable identifiers for the host document's field set.
//!
//! The calculator's only boundary is a set of named fields: inputs it reads
//! (defaulting silently when absent) and display fields it writes (skipping
//! silently when absent).

// ─── input fields ────────────────────────────────────────────────────────────

pub const CLIENT: &str = "client";
pub const BILL_RATE: &str = "bill_rate";
pub const BILL_OT_ADD: &str = "bill_ot_add";
pub const PAY_RATE: &str = "pay_rate";
pub const OT_RATE: &str = "ot_rate";
pub const REGULAR_HOURS: &str = "regular_hours";
pub const OT_HOURS: &str = "ot_hours";
pub const CONTRACT_WEEKS: &str = "contract_weeks";
pub const HOUSING_DAILY: &str = "housing_daily";
pub const MEALS_DAILY: &str = "meals_daily";
pub const ORIENTATION_TYPE: &str = "orientation_type";
pub const ORIENTATION_HOURS: &str = "orientation_hours";
pub const ORIENTATION_PAY_RATE: &str = "orientation_pay_rate";
pub const BONUS_START: &str = "bonus_start";
pub const BONUS_COMPLETE: &str = "bonus_complete";
pub const BCG_REIMBURSEMENT: &str = "bcg_reimbursement";
pub const SCHEDULE_DAYS: &str = "schedule_days";
pub const SICK_HOURS: &str = "sick_hours";
pub const AUTO_SICK_HOURS: &str = "auto_sick_hours";

/// Every settable input field, in form order.
pub const INPUT_FIELDS: [&str; 19] = [
    CLIENT,
    BILL_RATE,
    BILL_OT_ADD,
    PAY_RATE,
    OT_RATE,
    REGULAR_HOURS,
    OT_HOURS,
    CONTRACT_WEEKS,
    HOUSING_DAILY,
    MEALS_DAILY,
    ORIENTATION_TYPE,
    ORIENTATION_HOURS,
    ORIENTATION_PAY_RATE,
    BONUS_START,
    BONUS_COMPLETE,
    BCG_REIMBURSEMENT,
    SCHEDULE_DAYS,
    SICK_HOURS,
    AUTO_SICK_HOURS,
];

/// Numeric input fields, used for scenario validation and reset.
pub const NUMERIC_INPUTS: [&str; 16] = [
    BILL_RATE,
    BILL_OT_ADD,
    PAY_RATE,
    OT_RATE,
    REGULAR_HOURS,
    OT_HOURS,
    CONTRACT_WEEKS,
    HOUSING_DAILY,
    MEALS_DAILY,
    ORIENTATION_HOURS,
    ORIENTATION_PAY_RATE,
    BONUS_START,
    BONUS_COMPLETE,
    BCG_REIMBURSEMENT,
    SCHEDULE_DAYS,
    SICK_HOURS,
];

/// Numeric inputs a reset leaves untouched (orientation pay is restored to
/// its default separately).
pub const RESET_PRESERVED: [&str; 4] = [PAY_RATE, OT_RATE, ORIENTATION_HOURS, ORIENTATION_PAY_RATE];

// ─── display fields ──────────────────────────────────────────────────────────

pub const CLIENT_OPTIONS: &str = "client_options";
pub const ORIENTATION_OPTIONS: &str = "orientation_options";
pub const FEE_DISPLAY: &str = "fee_display";
pub const CLIENT_TITLE: &str = "client_title";

pub const AFTER_FEE_RATE: &str = "after_fee_rate";
pub const AFTER_FEE_OT_RATE: &str = "after_fee_ot_rate";

pub const STIPEND_DAILY: &str = "stipend_daily";
pub const STIPEND_WEEKLY: &str = "stipend_weekly";
pub const STIPEND_HOUSING_HOURLY: &str = "stipend_housing_hourly";
pub const STIPEND_MEALS_HOURLY: &str = "stipend_meals_hourly";
pub const STIPEND_HOURLY: &str = "stipend_hourly";

pub const TAXABLE_WEEKLY: &str = "taxable_weekly";
pub const GROSS_HOURLY: &str = "gross_hourly";
pub const GROSS_WEEKLY: &str = "gross_weekly";
pub const GROSS_MONTHLY: &str = "gross_monthly";
pub const GROSS_CONTRACT: &str = "gross_contract";

pub const MARGIN_HOURLY: &str = "margin_hourly";
pub const MARGIN_WEEKLY: &str = "margin_weekly";
pub const MARGIN_MONTHLY: &str = "margin_monthly";
pub const MARGIN_CONTRACT: &str = "margin_contract";

pub const BILLING_WEEKLY: &str = "billing_weekly";
pub const BILLING_MONTHLY: &str = "billing_monthly";
pub const BILLING_CONTRACT: &str = "billing_contract";

pub const ORIENTATION_RATE: &str = "orientation_rate";
pub const ORIENTATION_TOTAL: &str = "orientation_total";
pub const ORIENTATION_HOURLY: &str = "orientation_hourly";

pub const BONUS_START_HOURLY: &str = "bonus_start_hourly";
pub const BONUS_COMPLETE_HOURLY: &str = "bonus_complete_hourly";
pub const REIMBURSEMENT_HOURLY: &str = "reimbursement_hourly";
pub const SICK_PAY_HOURLY: &str = "sick_pay_hourly";

pub const MARGIN_GAUGE: &str = "margin_gauge";
pub const MARGIN_GAUGE_COLOR: &str = "margin_gauge_color";

/// Every field a fully-equipped host document carries.
pub const STANDARD_FIELDS: [&str; 51] = [
    // inputs
    CLIENT,
    BILL_RATE,
    BILL_OT_ADD,
    PAY_RATE,
    OT_RATE,
    REGULAR_HOURS,
    OT_HOURS,
    CONTRACT_WEEKS,
    HOUSING_DAILY,
    MEALS_DAILY,
    ORIENTATION_TYPE,
    ORIENTATION_HOURS,
    ORIENTATION_PAY_RATE,
    BONUS_START,
    BONUS_COMPLETE,
    BCG_REIMBURSEMENT,
    SCHEDULE_DAYS,
    SICK_HOURS,
    AUTO_SICK_HOURS,
    // displays
    CLIENT_OPTIONS,
    ORIENTATION_OPTIONS,
    FEE_DISPLAY,
    CLIENT_TITLE,
    AFTER_FEE_RATE,
    AFTER_FEE_OT_RATE,
    STIPEND_DAILY,
    STIPEND_WEEKLY,
    STIPEND_HOUSING_HOURLY,
    STIPEND_MEALS_HOURLY,
    STIPEND_HOURLY,
    TAXABLE_WEEKLY,
    GROSS_HOURLY,
    GROSS_WEEKLY,
    GROSS_MONTHLY,
    GROSS_CONTRACT,
    MARGIN_HOURLY,
    MARGIN_WEEKLY,
    MARGIN_MONTHLY,
    MARGIN_CONTRACT,
    BILLING_WEEKLY,
    BILLING_MONTHLY,
    BILLING_CONTRACT,
    ORIENTATION_RATE,
    ORIENTATION_TOTAL,
    ORIENTATION_HOURLY,
    BONUS_START_HOURLY,
    BONUS_COMPLETE_HOURLY,
    REIMBURSEMENT_HOURLY,
    SICK_PAY_HOURLY,
    MARGIN_GAUGE,
    MARGIN_GAUGE_COLOR,
];
