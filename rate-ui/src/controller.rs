//! Form wiring: change dispatch and the convenience behaviors around the
//! calculation.
//!
//! The controller owns no state of its own. The live field values are the
//! only state; every entry point reads the document fresh, recalculates,
//! and writes the results back. All writes go through the document's `set`,
//! so a host missing any field silently skips that behavior.

use rate_core::{Client, OrientationType, RateConfig, RateSheetCalculator, RateSheetOutputs};
use tracing::{debug, info};

use crate::document::FormDocument;
use crate::fields;
use crate::form::{read_input, write_outputs};
use crate::utils::{decimal_or_zero, format_number};

/// Wires the rate-sheet calculation to a host document.
#[derive(Debug, Clone)]
pub struct RateController {
    calculator: RateSheetCalculator,
    config: RateConfig,
}

impl RateController {
    pub fn new(config: RateConfig) -> Self {
        Self {
            calculator: RateSheetCalculator::new(config.clone()),
            config,
        }
    }

    /// Prepares a freshly-loaded document: populates the selectors, applies
    /// defaults to blank fields, and runs the first recalculation.
    pub fn init(
        &self,
        doc: &mut dyn FormDocument,
    ) -> RateSheetOutputs {
        self.populate_client_selector(doc);
        self.populate_orientation_selector(doc);

        if field_is_blank(doc, fields::AUTO_SICK_HOURS) {
            doc.set(fields::AUTO_SICK_HOURS, "true");
        }

        self.recalculate(doc)
    }

    /// Runs one full recalculation from the current field values.
    pub fn recalculate(
        &self,
        doc: &mut dyn FormDocument,
    ) -> RateSheetOutputs {
        let input = read_input(doc);
        let outputs = self.calculator.recalculate(&input);
        write_outputs(doc, &input, &outputs);
        outputs
    }

    /// Reacts to a single field change, then recalculates.
    ///
    /// Every change recalculates; a few fields have an extra behavior first.
    pub fn field_changed(
        &self,
        doc: &mut dyn FormDocument,
        field: &str,
    ) -> RateSheetOutputs {
        debug!(field, "field changed");

        match field {
            fields::PAY_RATE => self.sync_overtime_rate(doc),
            fields::ORIENTATION_TYPE => self.apply_orientation_default(doc),
            _ => {}
        }

        self.recalculate(doc)
    }

    /// Restores the form to its defaults and recalculates.
    ///
    /// Numeric inputs go to zero, except orientation hours and the base and
    /// overtime pay rates, which keep their values; orientation pay returns
    /// to the non-billable house rate.
    pub fn reset(
        &self,
        doc: &mut dyn FormDocument,
    ) -> RateSheetOutputs {
        info!("form reset");

        for field in fields::NUMERIC_INPUTS {
            if !fields::RESET_PRESERVED.contains(&field) {
                doc.set(field, "0");
            }
        }
        doc.set(
            fields::ORIENTATION_PAY_RATE,
            &format_number(self.config.non_billable_orientation_rate),
        );
        doc.set(fields::CLIENT, Client::DEFAULT.as_str());
        doc.set(fields::ORIENTATION_TYPE, OrientationType::DEFAULT.as_str());
        doc.set(fields::AUTO_SICK_HOURS, "true");

        self.recalculate(doc)
    }

    /// Fills the client selector from the fixed table if it is empty, and
    /// preselects the default client.
    fn populate_client_selector(
        &self,
        doc: &mut dyn FormDocument,
    ) {
        if field_is_blank(doc, fields::CLIENT_OPTIONS) {
            let options: Vec<&str> = Client::ALL.iter().map(Client::as_str).collect();
            doc.set(fields::CLIENT_OPTIONS, &options.join(","));
        }
        if field_is_blank(doc, fields::CLIENT) {
            doc.set(fields::CLIENT, Client::DEFAULT.as_str());
        }
    }

    /// Fills the orientation selector with its two options if empty,
    /// preselects the default, and applies the default pay rate.
    fn populate_orientation_selector(
        &self,
        doc: &mut dyn FormDocument,
    ) {
        if field_is_blank(doc, fields::ORIENTATION_OPTIONS) {
            let options: Vec<&str> = OrientationType::ALL
                .iter()
                .map(OrientationType::as_str)
                .collect();
            doc.set(fields::ORIENTATION_OPTIONS, &options.join(","));
        }
        if field_is_blank(doc, fields::ORIENTATION_TYPE) {
            doc.set(fields::ORIENTATION_TYPE, OrientationType::DEFAULT.as_str());
        }
        self.apply_orientation_default(doc);
    }

    /// Overwrites the overtime rate with 1.5× the base rate.
    fn sync_overtime_rate(
        &self,
        doc: &mut dyn FormDocument,
    ) {
        let pay_rate = doc
            .get(fields::PAY_RATE)
            .map(|value| decimal_or_zero(&value))
            .unwrap_or_default();
        let ot_rate = pay_rate * self.config.ot_multiplier;
        doc.set(fields::OT_RATE, &format_number(ot_rate));
    }

    /// When non-billable orientation is selected, restores the orientation
    /// pay field to the house rate — unless the user already entered a
    /// nonzero value.
    fn apply_orientation_default(
        &self,
        doc: &mut dyn FormDocument,
    ) {
        let orientation = doc
            .get(fields::ORIENTATION_TYPE)
            .as_deref()
            .and_then(OrientationType::parse)
            .unwrap_or(OrientationType::DEFAULT);
        if orientation != OrientationType::NonBillable {
            return;
        }

        let entered = doc
            .get(fields::ORIENTATION_PAY_RATE)
            .map(|value| decimal_or_zero(&value))
            .unwrap_or_default();
        if entered.is_zero() {
            doc.set(
                fields::ORIENTATION_PAY_RATE,
                &format_number(self.config.non_billable_orientation_rate),
            );
        }
    }
}

impl Default for RateController {
    fn default() -> Self {
        Self::new(RateConfig::default())
    }
}

fn field_is_blank(
    doc: &dyn FormDocument,
    field: &str,
) -> bool {
    match doc.get(field) {
        Some(value) => value.trim().is_empty(),
        None => false, // an absent field is skipped, not populated
    }
}
