//! Declarative form validation.
//!
//! Each form declares a field-rule list; a generic validator walks the
//! rules against the submitted values and returns per-field errors. All
//! checks run before any remote call is attempted, and a valid submission
//! converts directly into the typed mutation input, so an input value that
//! exists has already passed its form's rules.

use std::collections::HashMap;

use crate::db::models::{AircraftInput, CrewMemberInput, FlightInput, PilotInput};
use crate::models::time::{DateValue, TimeValue};
use crate::models::{RawDate, RawTime};

/// Raw values captured from a form: scalar fields plus multi-select
/// selections (the flight form's crew checkboxes).
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    fields: HashMap<String, String>,
    selections: HashMap<String, Vec<String>>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set_selection(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = String>,
    ) -> &mut Self {
        self.selections.insert(name.into(), values.into_iter().collect());
        self
    }

    /// Trimmed scalar value; empty string when the field was never set.
    pub fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(|v| v.trim()).unwrap_or("")
    }

    /// Non-empty entries of a multi-select, in selection order.
    pub fn selection(&self, name: &str) -> Vec<&str> {
        self.selections
            .get(name)
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// What a field must contain once present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Single-choice dropdown; choice validity is the server's concern.
    Select,
    /// `YYYY-MM-DD` from a date input.
    Date,
    /// `HH:MM` from a time input.
    Time,
    /// Whole number, zero or greater.
    NonNegativeInt,
    /// Multi-select needing at least `min` entries.
    MultiSelect { min: usize },
}

/// One field's validation rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// A single field's failure, keyed for per-field display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate submitted values against a form's rules.
///
/// Returns one error per failing field; an empty list means the form is
/// valid. A non-required empty field passes without a type check.
pub fn validate(rules: &[FieldRule], values: &FormValues) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for rule in rules {
        if let FieldKind::MultiSelect { min } = rule.kind {
            let selected = values.selection(rule.name).len();
            if selected < min {
                let message = if min == 1 {
                    "Please select at least one option.".to_string()
                } else {
                    format!("Please select at least {min} options.")
                };
                errors.push(FieldError::new(rule.name, message));
            }
            continue;
        }

        let value = values.text(rule.name);
        if value.is_empty() {
            if rule.required {
                let message = match rule.kind {
                    FieldKind::Select => "Please select an option.",
                    _ => "This field is required.",
                };
                errors.push(FieldError::new(rule.name, message));
            }
            continue;
        }

        match rule.kind {
            FieldKind::Text | FieldKind::Select => {}
            FieldKind::Date => {
                let raw = RawDate::Text(value.to_string());
                if DateValue::parse(Some(&raw)).day().is_none() {
                    errors.push(FieldError::new(rule.name, "Please enter a valid date."));
                }
            }
            FieldKind::Time => {
                let raw = RawTime::Text(value.to_string());
                if !matches!(TimeValue::parse(Some(&raw)), TimeValue::HourMinute(_, _)) {
                    errors.push(FieldError::new(rule.name, "Please enter a valid time."));
                }
            }
            FieldKind::NonNegativeInt => {
                if value.parse::<u32>().is_err() {
                    errors.push(FieldError::new(
                        rule.name,
                        "Please enter a whole number of zero or more.",
                    ));
                }
            }
            FieldKind::MultiSelect { .. } => {}
        }
    }

    errors
}

// ==================== Per-form rule sets ====================

pub const AIRCRAFT_FORM: &[FieldRule] = &[
    FieldRule {
        name: "aircraft_code",
        label: "Aircraft code",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "type_code",
        label: "Aircraft type",
        required: true,
        kind: FieldKind::Select,
    },
    FieldRule {
        name: "base_code",
        label: "Base",
        required: true,
        kind: FieldKind::Select,
    },
    FieldRule {
        name: "acquisition_date",
        label: "Acquisition date",
        required: true,
        kind: FieldKind::Date,
    },
];

pub const PILOT_FORM: &[FieldRule] = &[
    FieldRule {
        name: "pilot_code",
        label: "Pilot code",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "name",
        label: "Name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "flight_hours",
        label: "Flight hours",
        required: true,
        kind: FieldKind::NonNegativeInt,
    },
    FieldRule {
        name: "base_code",
        label: "Base",
        required: true,
        kind: FieldKind::Select,
    },
    FieldRule {
        name: "hire_date",
        label: "Hire date",
        required: true,
        kind: FieldKind::Date,
    },
];

pub const CREW_MEMBER_FORM: &[FieldRule] = &[
    FieldRule {
        name: "crew_code",
        label: "Crew code",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "name",
        label: "Name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "base_code",
        label: "Base",
        required: true,
        kind: FieldKind::Select,
    },
    FieldRule {
        name: "hire_date",
        label: "Hire date",
        required: true,
        kind: FieldKind::Date,
    },
];

pub const FLIGHT_FORM: &[FieldRule] = &[
    FieldRule {
        name: "flight_number",
        label: "Flight number",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "origin",
        label: "Origin",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "destination",
        label: "Destination",
        required: true,
        kind: FieldKind::Text,
    },
    FieldRule {
        name: "flight_date",
        label: "Flight date",
        required: true,
        kind: FieldKind::Date,
    },
    FieldRule {
        name: "departure_time",
        label: "Departure time",
        required: true,
        kind: FieldKind::Time,
    },
    FieldRule {
        name: "aircraft_code",
        label: "Aircraft",
        required: true,
        kind: FieldKind::Select,
    },
    FieldRule {
        name: "pilot_code",
        label: "Pilot",
        required: true,
        kind: FieldKind::Select,
    },
    FieldRule {
        name: "status",
        label: "Status",
        required: true,
        kind: FieldKind::Select,
    },
    FieldRule {
        name: "crew_codes",
        label: "Crew",
        required: true,
        kind: FieldKind::MultiSelect { min: 1 },
    },
];

// ==================== Validated input builders ====================

fn optional_text(values: &FormValues, name: &str) -> Option<String> {
    let value = values.text(name);
    (!value.is_empty()).then(|| value.to_string())
}

/// Validate the aircraft form and build its mutation input.
pub fn build_aircraft_input(values: &FormValues) -> Result<AircraftInput, Vec<FieldError>> {
    let errors = validate(AIRCRAFT_FORM, values);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(AircraftInput {
        aircraft_code: values.text("aircraft_code").to_string(),
        type_code: values.text("type_code").to_string(),
        base_code: values.text("base_code").to_string(),
        acquisition_date: optional_text(values, "acquisition_date"),
    })
}

/// Validate the pilot form and build its mutation input.
pub fn build_pilot_input(values: &FormValues) -> Result<PilotInput, Vec<FieldError>> {
    let errors = validate(PILOT_FORM, values);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(PilotInput {
        pilot_code: values.text("pilot_code").to_string(),
        name: values.text("name").to_string(),
        // Validated as NonNegativeInt above.
        flight_hours: values.text("flight_hours").parse().unwrap_or(0),
        base_code: values.text("base_code").to_string(),
        hire_date: optional_text(values, "hire_date"),
    })
}

/// Validate the crew-member form and build its mutation input.
pub fn build_crew_member_input(values: &FormValues) -> Result<CrewMemberInput, Vec<FieldError>> {
    let errors = validate(CREW_MEMBER_FORM, values);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(CrewMemberInput {
        crew_code: values.text("crew_code").to_string(),
        name: values.text("name").to_string(),
        base_code: values.text("base_code").to_string(),
        hire_date: optional_text(values, "hire_date"),
    })
}

/// Validate the flight form and build its mutation input.
pub fn build_flight_input(values: &FormValues) -> Result<FlightInput, Vec<FieldError>> {
    let errors = validate(FLIGHT_FORM, values);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(FlightInput {
        flight_number: values.text("flight_number").to_string(),
        origin: values.text("origin").to_string(),
        destination: values.text("destination").to_string(),
        flight_date: values.text("flight_date").to_string(),
        departure_time: values.text("departure_time").to_string(),
        status: values.text("status").to_string(),
        aircraft_code: values.text("aircraft_code").to_string(),
        pilot_code: values.text("pilot_code").to_string(),
        crew_codes: values
            .selection("crew_codes")
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
