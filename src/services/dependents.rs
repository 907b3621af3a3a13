//! Referential-integrity guard for entity deletion.
//!
//! An aircraft, pilot or crew member must not be deleted while any flight
//! references it. The check is a pure function over a flight snapshot; the
//! caller decides how fresh that snapshot is ([`guard_delete`] refetches
//! the full list before deciding). A refused deletion yields the list of
//! blocking flights for the view layer to present; it is data, not an
//! error, and the caller must not override it.

use crate::db::repository::{FleetRepository, RepositoryResult};
use crate::models::time::DateValue;
use crate::models::Flight;

/// Reference to an entity whose deletion is being considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    Aircraft(&'a str),
    Pilot(&'a str),
    CrewMember(&'a str),
}

impl EntityRef<'_> {
    /// The entity's natural key.
    pub fn code(&self) -> &str {
        match self {
            EntityRef::Aircraft(code) | EntityRef::Pilot(code) | EntityRef::CrewMember(code) => {
                code
            }
        }
    }

    fn is_referenced_by(&self, flight: &Flight) -> bool {
        match self {
            EntityRef::Aircraft(code) => flight.aircraft_code.as_deref() == Some(*code),
            EntityRef::Pilot(code) => flight.pilot_code.as_deref() == Some(*code),
            EntityRef::CrewMember(code) => flight.crew_codes().any(|c| c == *code),
        }
    }
}

/// Row of the blocking-flights list shown when a deletion is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSummary {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub flight_date: String,
}

impl From<&Flight> for FlightSummary {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            origin: flight.origin.clone().unwrap_or_else(|| "N/A".to_string()),
            destination: flight
                .destination
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            status: flight.status.clone().unwrap_or_else(|| "unknown".to_string()),
            flight_date: DateValue::parse(flight.flight_date.as_ref()).display(),
        }
    }
}

/// Result of a guarded deletion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// No flight referenced the entity; the delete mutation ran.
    Deleted,
    /// Dependent flights exist; the delete mutation was NOT invoked.
    Blocked(Vec<FlightSummary>),
}

/// Whether any flight in the snapshot references the entity.
///
/// Pure over the provided snapshot; an empty snapshot never blocks.
pub fn has_dependent_flights(entity: EntityRef<'_>, flights: &[Flight]) -> bool {
    flights.iter().any(|f| entity.is_referenced_by(f))
}

/// Summaries of every flight in the snapshot referencing the entity,
/// in snapshot order.
pub fn blocking_flights(entity: EntityRef<'_>, flights: &[Flight]) -> Vec<FlightSummary> {
    flights
        .iter()
        .filter(|f| entity.is_referenced_by(f))
        .map(FlightSummary::from)
        .collect()
}

/// Refetch the flight list, refuse the deletion if anything references the
/// entity, and otherwise run the delete mutation.
pub async fn guard_delete(
    repo: &dyn FleetRepository,
    entity: EntityRef<'_>,
) -> RepositoryResult<DeletionOutcome> {
    let flights = repo.list_flights().await?;
    let blocking = blocking_flights(entity, &flights);
    if !blocking.is_empty() {
        tracing::info!(
            code = entity.code(),
            blocked_by = blocking.len(),
            "deletion refused: dependent flights exist"
        );
        return Ok(DeletionOutcome::Blocked(blocking));
    }

    match entity {
        EntityRef::Aircraft(code) => repo.delete_aircraft(code).await?,
        EntityRef::Pilot(code) => repo.delete_pilot(code).await?,
        EntityRef::CrewMember(code) => repo.delete_crew_member(code).await?,
    }
    Ok(DeletionOutcome::Deleted)
}
