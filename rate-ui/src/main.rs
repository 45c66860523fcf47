use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rate_core::{Client, OrientationType, RateConfig};
use rate_ui::controller::RateController;
use rate_ui::document::{FormDocument, MemoryForm};
use rate_ui::fields;
use rate_ui::utils::parse_decimal;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Pay-package rate calculator for staffing contracts.
///
/// Loads a form scenario, applies each field change in turn (recalculating
/// after every one, as the live form does), and prints the derived package,
/// billing, and margin figures.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML scenario file with a [fields] table of `field = "value"` pairs.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Individual field assignment, e.g. `--set pay_rate=30`. Repeatable;
    /// applied after the scenario file.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    set: Vec<String>,
}

/// A form scenario: field values keyed by field identifier.
#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── field application ───────────────────────────────────────────────────────

/// Validates one scenario value and applies it as a live field change.
fn apply_field(
    controller: &RateController,
    form: &mut MemoryForm,
    field: &str,
    value: &str,
) -> Result<()> {
    if !fields::INPUT_FIELDS.contains(&field) {
        bail!("unknown input field '{field}'");
    }

    match field {
        fields::CLIENT => {
            Client::parse(value).ok_or_else(|| anyhow!("unknown client '{value}'"))?;
        }
        fields::ORIENTATION_TYPE => {
            OrientationType::parse(value)
                .ok_or_else(|| anyhow!("unknown orientation type '{value}'"))?;
        }
        fields::AUTO_SICK_HOURS => {}
        numeric => {
            parse_decimal(value).with_context(|| format!("field '{numeric}'"))?;
        }
    }

    debug!(field, value, "applying field");
    form.set(field, value);
    controller.field_changed(form, field);
    Ok(())
}

// ─── summary ─────────────────────────────────────────────────────────────────

fn display(
    form: &MemoryForm,
    field: &str,
) -> String {
    match form.get(field) {
        Some(value) if !value.is_empty() => value,
        _ => "—".to_string(),
    }
}

/// Renders the output fields as a labeled report.
fn render_summary(form: &MemoryForm) -> String {
    let mut out = String::new();
    let mut line = |label: &str, field: &str| {
        out.push_str(&format!("{label:<26}{}\n", display(form, field)));
    };

    line("Client", fields::CLIENT_TITLE);
    line("Fee", fields::FEE_DISPLAY);
    line("After-fee rate", fields::AFTER_FEE_RATE);
    line("After-fee OT rate", fields::AFTER_FEE_OT_RATE);
    line("Stipend daily", fields::STIPEND_DAILY);
    line("Stipend hourly", fields::STIPEND_HOURLY);
    line("Taxable weekly", fields::TAXABLE_WEEKLY);
    line("Gross hourly", fields::GROSS_HOURLY);
    line("Gross weekly", fields::GROSS_WEEKLY);
    line("Gross monthly", fields::GROSS_MONTHLY);
    line("Gross contract", fields::GROSS_CONTRACT);
    line("Billing weekly", fields::BILLING_WEEKLY);
    line("Billing monthly", fields::BILLING_MONTHLY);
    line("Billing contract", fields::BILLING_CONTRACT);
    line("Orientation rate", fields::ORIENTATION_RATE);
    line("Orientation total", fields::ORIENTATION_TOTAL);
    line("Sick hours", fields::SICK_HOURS);
    line("Margin hourly", fields::MARGIN_HOURLY);
    line("Margin weekly", fields::MARGIN_WEEKLY);
    line("Margin monthly", fields::MARGIN_MONTHLY);
    line("Margin contract", fields::MARGIN_CONTRACT);
    line("Margin gauge", fields::MARGIN_GAUGE);
    line("Margin band", fields::MARGIN_GAUGE_COLOR);

    out
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let controller = RateController::new(RateConfig::default());
    let mut form = MemoryForm::with_standard_fields();
    controller.init(&mut form);

    if let Some(path) = &cli.scenario {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read scenario '{}'", path.display()))?;
        let scenario: Scenario = toml::from_str(&raw)
            .with_context(|| format!("cannot parse scenario '{}'", path.display()))?;

        for (field, value) in &scenario.fields {
            apply_field(&controller, &mut form, field, value)
                .with_context(|| format!("scenario '{}'", path.display()))?;
        }
        info!("scenario loaded: {}", path.display());
    }

    for assignment in &cli.set {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("expected FIELD=VALUE, got '{assignment}'"))?;
        apply_field(&controller, &mut form, field, value)?;
    }

    info!("\n{}", render_summary(&form));

    Ok(())
}
