//! Input payloads for create/update mutations.
//!
//! These are the typed counterparts of the dashboard's form submissions.
//! Dates arrive from date inputs as `YYYY-MM-DD` strings and times from
//! time inputs as `HH:MM`; the form validator produces these structs, so a
//! constructed input has already passed field validation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftInput {
    pub aircraft_code: String,
    pub type_code: String,
    pub base_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotInput {
    pub pilot_code: String,
    pub name: String,
    pub flight_hours: u32,
    pub base_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMemberInput {
    pub crew_code: String,
    pub name: String,
    pub base_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInput {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub flight_date: String,
    pub departure_time: String,
    pub status: String,
    pub aircraft_code: String,
    pub pilot_code: String,
    pub crew_codes: Vec<String>,
}
