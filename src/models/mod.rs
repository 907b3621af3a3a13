//! Domain entities for fleet records.
//!
//! Every entity is identified by a natural-key string code assigned by the
//! remote API. Non-key fields default when a query does not select them, so
//! the same types deserialize from every operation's field selection.
//!
//! Relation fields come in two shapes on the wire: a flat `base_code` and an
//! optionally nested `base` object. [`HomeBased::base_code`] resolves the
//! flat code first and falls back to the nested relation.

use serde::{Deserialize, Serialize};

pub mod time;


pub use time::{DateValue, TimeValue};

/// A date as the remote API sends it: an ISO string, a free-form string, or
/// an epoch-millisecond number. Normalized through [`DateValue::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Millis(i64),
    Text(String),
}

/// A departure time as the remote API sends it. Normalized through
/// [`TimeValue::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Millis(i64),
    Text(String),
}

/// Nested base relation as selected by list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRef {
    pub base_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// An aircraft in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub aircraft_code: String,
    #[serde(default)]
    pub type_code: Option<String>,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub base: Option<BaseRef>,
    #[serde(default)]
    pub acquisition_date: Option<RawDate>,
}

/// A pilot stationed at a base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    pub pilot_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub flight_hours: Option<u32>,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub base: Option<BaseRef>,
    #[serde(default)]
    pub hire_date: Option<RawDate>,
}

/// A cabin crew member stationed at a base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub crew_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub base: Option<BaseRef>,
    #[serde(default)]
    pub hire_date: Option<RawDate>,
}

/// Crew assignment as nested in flight records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewAssignment {
    pub crew_code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A flight referencing one aircraft, one pilot and at least one crew
/// member. The status string is kept verbatim; values outside the known
/// set only ever match the `All` dashboard filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub flight_date: Option<RawDate>,
    #[serde(default)]
    pub departure_time: Option<RawTime>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub aircraft_code: Option<String>,
    #[serde(default)]
    pub pilot_code: Option<String>,
    #[serde(default)]
    pub crew: Vec<CrewAssignment>,
}

impl Flight {
    /// Codes of the crew members assigned to this flight.
    pub fn crew_codes(&self) -> impl Iterator<Item = &str> {
        self.crew.iter().map(|c| c.crew_code.as_str())
    }
}

/// A physical location where aircraft, pilots and crew are stationed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub base_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A named category of aircraft model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    pub type_code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Fallback label when an entity has no resolvable base.
pub const UNASSIGNED_BASE: &str = "unassigned";

/// Entities stationed at a base.
///
/// The flat `base_code` wins over the nested relation when both are
/// present; queries are free to select either shape.
pub trait HomeBased {
    fn flat_base_code(&self) -> Option<&str>;
    fn base_relation(&self) -> Option<&BaseRef>;

    /// Resolved base code, flat field first, nested relation second.
    fn base_code(&self) -> Option<&str> {
        self.flat_base_code()
            .or_else(|| self.base_relation().map(|b| b.base_code.as_str()))
    }

    /// Display label for the base: its name, else its code, else
    /// [`UNASSIGNED_BASE`].
    fn base_label(&self) -> &str {
        if let Some(base) = self.base_relation() {
            if let Some(name) = base.name.as_deref() {
                return name;
            }
        }
        self.base_code().unwrap_or(UNASSIGNED_BASE)
    }
}

macro_rules! impl_home_based {
    ($ty:ty) => {
        impl HomeBased for $ty {
            fn flat_base_code(&self) -> Option<&str> {
                self.base_code.as_deref()
            }

            fn base_relation(&self) -> Option<&BaseRef> {
                self.base.as_ref()
            }
        }
    };
}

impl_home_based!(Aircraft);
impl_home_based!(Pilot);
impl_home_based!(CrewMember);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_code_prefers_flat_field() {
        let pilot = Pilot {
            pilot_code: "P1".to_string(),
            name: Some("Ana".to_string()),
            flight_hours: Some(1200),
            base_code: Some("MAD".to_string()),
            base: Some(BaseRef {
                base_code: "BCN".to_string(),
                name: Some("Barcelona".to_string()),
                location: None,
            }),
            hire_date: None,
        };
        assert_eq!(pilot.base_code(), Some("MAD"));
    }

    #[test]
    fn base_code_falls_back_to_relation() {
        let pilot = Pilot {
            pilot_code: "P1".to_string(),
            name: None,
            flight_hours: None,
            base_code: None,
            base: Some(BaseRef {
                base_code: "BCN".to_string(),
                name: None,
                location: None,
            }),
            hire_date: None,
        };
        assert_eq!(pilot.base_code(), Some("BCN"));
        assert_eq!(pilot.base_label(), "BCN");
    }

    #[test]
    fn base_label_without_any_base() {
        let aircraft = Aircraft {
            aircraft_code: "A1".to_string(),
            type_code: None,
            base_code: None,
            base: None,
            acquisition_date: None,
        };
        assert_eq!(aircraft.base_label(), UNASSIGNED_BASE);
    }

    #[test]
    fn flight_deserializes_from_partial_selection() {
        // The dashboard query selects neither aircraft_code nor crew.
        let flight: Flight = serde_json::from_value(serde_json::json!({
            "flight_number": "FL100",
            "origin": "MAD",
            "destination": "LPA",
            "flight_date": "2024-06-01",
            "status": "scheduled"
        }))
        .unwrap();
        assert_eq!(flight.flight_number, "FL100");
        assert!(flight.aircraft_code.is_none());
        assert!(flight.crew.is_empty());
        assert_eq!(
            flight.flight_date,
            Some(RawDate::Text("2024-06-01".to_string()))
        );
    }

    #[test]
    fn raw_date_accepts_epoch_millis() {
        let date: RawDate = serde_json::from_value(serde_json::json!(1700000000000i64)).unwrap();
        assert_eq!(date, RawDate::Millis(1700000000000));
    }
}
