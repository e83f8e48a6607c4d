//! Form buffers for creating new records.
//!
//! A form buffer holds the raw string input for each field of one entity kind,
//! keyed by the field's wire name. Values are sent to the server exactly as
//! typed; the input constraints in [`FormBuffer::check_inputs`] only mirror what
//! a typed form input would refuse (empty required fields, a non-numeric number
//! field, a malformed date) and never coerce the values.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{CoverdeskError, Result};
use crate::types::EntityKind;

/// Kind of input widget backing a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Number,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// One of a fixed set of `(wire value, description)` options
    Select(&'static [(&'static str, &'static str)]),
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as sent on the wire
    pub name: &'static str,
    /// Human-readable label / placeholder
    pub label: &'static str,
    pub input: InputType,
}

pub const POLICY_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("HEALTH", "Health Insurance"),
    ("AUTO", "Auto Insurance"),
    ("LIFE", "Life Insurance"),
    ("HOME", "Home Insurance"),
];

pub const PAYMENT_METHOD_OPTIONS: &[(&str, &str)] = &[
    ("CREDIT_CARD", "Credit Card"),
    ("DEBIT_CARD", "Debit Card"),
    ("BANK_TRANSFER", "Bank Transfer"),
    ("UPI", "UPI"),
];

const CUSTOMER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Full Name",
        input: InputType::Text,
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        input: InputType::Email,
    },
    FieldSpec {
        name: "dob",
        label: "Date of Birth",
        input: InputType::Date,
    },
];

const POLICY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "customerId",
        label: "Customer ID",
        input: InputType::Number,
    },
    FieldSpec {
        name: "policyType",
        label: "Policy Type",
        input: InputType::Select(POLICY_TYPE_OPTIONS),
    },
    FieldSpec {
        name: "premium",
        label: "Premium Amount ($)",
        input: InputType::Number,
    },
];

const CLAIM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "policyId",
        label: "Policy ID",
        input: InputType::Number,
    },
    FieldSpec {
        name: "claimAmount",
        label: "Claim Amount ($)",
        input: InputType::Number,
    },
    FieldSpec {
        name: "incidentDate",
        label: "Incident Date",
        input: InputType::Date,
    },
];

const PAYMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "customerId",
        label: "Customer ID",
        input: InputType::Number,
    },
    FieldSpec {
        name: "amount",
        label: "Payment Amount ($)",
        input: InputType::Number,
    },
    FieldSpec {
        name: "paymentMethod",
        label: "Payment Method",
        input: InputType::Select(PAYMENT_METHOD_OPTIONS),
    },
];

/// Field layout for an entity kind, in display order
pub fn fields_for(kind: EntityKind) -> &'static [FieldSpec] {
    match kind {
        EntityKind::Customer => CUSTOMER_FIELDS,
        EntityKind::Policy => POLICY_FIELDS,
        EntityKind::Claim => CLAIM_FIELDS,
        EntityKind::Payment => PAYMENT_FIELDS,
    }
}

/// Title of the create form / submit action
pub fn submit_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Customer => "Create Customer",
        EntityKind::Policy => "Create Policy",
        EntityKind::Claim => "Submit Claim",
        EntityKind::Payment => "Process Payment",
    }
}

/// Pending input values for creating one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBuffer {
    kind: EntityKind,
    values: Vec<String>,
}

impl FormBuffer {
    /// An all-empty buffer for the given kind
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            values: vec![String::new(); fields_for(kind).len()],
        }
    }

    /// Build a buffer from `(field name, value)` pairs
    pub fn with_values(kind: EntityKind, pairs: &[(&str, &str)]) -> Result<Self> {
        let mut form = Self::new(kind);
        for (name, value) in pairs {
            form.set(name, *value)?;
        }
        Ok(form)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        fields_for(self.kind)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.values[i].as_str())
    }

    pub fn value_at(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let index = self.position(name).ok_or_else(|| CoverdeskError::InvalidForm {
            field: name.to_string(),
            reason: format!("not a {} field", self.kind),
        })?;
        self.values[index] = value.into();
        Ok(())
    }

    pub fn set_at(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn push_char(&mut self, index: usize, c: char) {
        if let Some(slot) = self.values.get_mut(index) {
            slot.push(c);
        }
    }

    pub fn pop_char(&mut self, index: usize) {
        if let Some(slot) = self.values.get_mut(index) {
            slot.pop();
        }
    }

    /// Step a select field to the next (or previous) option.
    /// An empty select starts at the first (or last) option.
    pub fn cycle_option(&mut self, index: usize, forward: bool) {
        let Some(FieldSpec {
            input: InputType::Select(options),
            ..
        }) = self.fields().get(index).copied()
        else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|(v, _)| *v == self.values[index]);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.values[index] = options[next].0.to_string();
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    /// Check the values against their input types.
    ///
    /// Returns the first offending field as [`CoverdeskError::InvalidForm`],
    /// labelled the way the form displays it.
    pub fn check_inputs(&self) -> Result<()> {
        for (spec, value) in self.fields().iter().zip(&self.values) {
            if let Some(reason) = input_problem(spec.input, value) {
                return Err(CoverdeskError::InvalidForm {
                    field: spec.label.to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.name == name)
    }
}

fn input_problem(input: InputType, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("please fill out this field".to_string());
    }
    match input {
        InputType::Text => None,
        InputType::Email => {
            let valid = value
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
                && !value.chars().any(char::is_whitespace);
            (!valid).then(|| format!("'{}' is not an email address", value))
        }
        InputType::Number => {
            let valid = value.trim().parse::<f64>().is_ok_and(f64::is_finite);
            (!valid).then(|| format!("'{}' is not a number", value))
        }
        InputType::Date => value
            .parse::<jiff::civil::Date>()
            .err()
            .map(|_| format!("'{}' is not a date (expected YYYY-MM-DD)", value)),
        InputType::Select(options) => {
            let valid = options.iter().any(|(v, _)| *v == value);
            (!valid).then(|| {
                let choices: Vec<&str> = options.iter().map(|(v, _)| *v).collect();
                format!("expected one of: {}", choices.join(", "))
            })
        }
    }
}

impl Serialize for FormBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (spec, value) in self.fields().iter().zip(&self.values) {
            map.serialize_entry(spec.name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let form = FormBuffer::new(EntityKind::Customer);
        assert!(form.is_empty());
        assert_eq!(form.len(), 3);
        assert_eq!(form.get("dob"), Some(""));
    }

    #[test]
    fn test_serializes_string_values_under_wire_names() {
        let form = FormBuffer::with_values(
            EntityKind::Policy,
            &[("customerId", "3"), ("policyType", "LIFE"), ("premium", "1500")],
        )
        .unwrap();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"customerId": "3", "policyType": "LIFE", "premium": "1500"})
        );
    }

    #[test]
    fn test_set_unknown_field_fails() {
        let mut form = FormBuffer::new(EntityKind::Claim);
        assert!(form.set("status", "APPROVED").is_err());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut form = FormBuffer::with_values(
            EntityKind::Customer,
            &[("name", "Alice"), ("email", "alice@x.com"), ("dob", "1990-01-01")],
        )
        .unwrap();
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_cycle_option_wraps() {
        let mut form = FormBuffer::new(EntityKind::Payment);
        form.cycle_option(2, true);
        assert_eq!(form.get("paymentMethod"), Some("CREDIT_CARD"));
        form.cycle_option(2, false);
        assert_eq!(form.get("paymentMethod"), Some("UPI"));

        // Non-select fields are left alone
        form.cycle_option(0, true);
        assert_eq!(form.get("customerId"), Some(""));
    }

    #[test]
    fn test_check_inputs_accepts_complete_customer() {
        let form = FormBuffer::with_values(
            EntityKind::Customer,
            &[("name", "Alice"), ("email", "alice@x.com"), ("dob", "1990-01-01")],
        )
        .unwrap();
        assert!(form.check_inputs().is_ok());
    }

    #[test]
    fn test_check_inputs_reports_first_problem_by_label() {
        let form = FormBuffer::with_values(
            EntityKind::Customer,
            &[("name", "Alice"), ("email", "alice@x.com"), ("dob", "01/01/1990")],
        )
        .unwrap();
        let err = form.check_inputs().unwrap_err().to_string();
        assert!(err.starts_with("Date of Birth:"), "got: {err}");

        let empty = FormBuffer::new(EntityKind::Claim);
        let err = empty.check_inputs().unwrap_err().to_string();
        assert_eq!(err, "Policy ID: please fill out this field");
    }

    #[test]
    fn test_check_inputs_number_and_select() {
        let form = FormBuffer::with_values(
            EntityKind::Policy,
            &[("customerId", "abc"), ("policyType", "AUTO"), ("premium", "10")],
        )
        .unwrap();
        assert!(form.check_inputs().is_err());

        let form = FormBuffer::with_values(
            EntityKind::Policy,
            &[("customerId", "1"), ("policyType", "BOAT"), ("premium", "10")],
        )
        .unwrap();
        let err = form.check_inputs().unwrap_err().to_string();
        assert!(err.contains("HEALTH, AUTO, LIFE, HOME"), "got: {err}");
    }

    #[test]
    fn test_check_inputs_does_not_alter_values() {
        let form = FormBuffer::with_values(
            EntityKind::Payment,
            &[("customerId", " 4"), ("amount", "250.00"), ("paymentMethod", "UPI")],
        )
        .unwrap();
        assert!(form.check_inputs().is_ok());
        assert_eq!(form.get("customerId"), Some(" 4"));
        assert_eq!(form.get("amount"), Some("250.00"));
    }
}
