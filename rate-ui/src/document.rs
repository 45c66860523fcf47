//! The host document seam.
//!
//! The calculator never talks to a concrete UI toolkit; it reads and writes
//! named fields through [`FormDocument`]. A host that lacks some fields is
//! legal — reads default, writes skip — so the calculator degrades
//! gracefully to whatever subset of fields the document carries.

use std::collections::BTreeMap;

use crate::fields;

/// A set of named form fields holding string values.
pub trait FormDocument {
    /// Returns the current value of `field`, or `None` when the document
    /// does not carry it.
    fn get(
        &self,
        field: &str,
    ) -> Option<String>;

    /// Writes `value` into `field`. Returns `false`, and changes nothing,
    /// when the document does not carry the field.
    fn set(
        &mut self,
        field: &str,
        value: &str,
    ) -> bool;

    /// Whether the document carries `field` at all.
    fn has(
        &self,
        field: &str,
    ) -> bool;
}

/// An in-memory host document, used by the CLI and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: BTreeMap<String, String>,
}

impl MemoryForm {
    /// A document with no fields at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A document carrying every standard input and display field, all blank.
    pub fn with_standard_fields() -> Self {
        let mut form = Self::default();
        for field in fields::STANDARD_FIELDS {
            form.values.insert(field.to_string(), String::new());
        }
        form
    }

    /// Adds a field (blank) if it is not already present.
    pub fn add_field(
        &mut self,
        field: &str,
    ) {
        self.values.entry(field.to_string()).or_default();
    }

    /// Removes a field entirely, as if the host document never had it.
    pub fn remove_field(
        &mut self,
        field: &str,
    ) {
        self.values.remove(field);
    }

    /// Field names currently present, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl FormDocument for MemoryForm {
    fn get(
        &self,
        field: &str,
    ) -> Option<String> {
        self.values.get(field).cloned()
    }

    fn set(
        &mut self,
        field: &str,
        value: &str,
    ) -> bool {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    fn has(
        &self,
        field: &str,
    ) -> bool {
        self.values.contains_key(field)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_updates_existing_field() {
        let mut form = MemoryForm::with_standard_fields();

        assert!(form.set(fields::BILL_RATE, "80"));
        assert_eq!(form.get(fields::BILL_RATE), Some("80".to_string()));
    }

    #[test]
    fn set_skips_missing_field() {
        let mut form = MemoryForm::empty();

        assert!(!form.set(fields::BILL_RATE, "80"));
        assert_eq!(form.get(fields::BILL_RATE), None);
    }

    #[test]
    fn remove_field_makes_it_absent() {
        let mut form = MemoryForm::with_standard_fields();
        form.remove_field(fields::MARGIN_HOURLY);

        assert!(!form.has(fields::MARGIN_HOURLY));
        assert!(!form.set(fields::MARGIN_HOURLY, "x"));
    }

    #[test]
    fn standard_form_carries_every_field() {
        let form = MemoryForm::with_standard_fields();

        for field in fields::STANDARD_FIELDS {
            assert!(form.has(field), "missing standard field {field}");
        }
    }
}
