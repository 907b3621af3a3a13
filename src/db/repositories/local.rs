//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`FleetRepository`]
//! suitable for unit testing and local development. All data is stored in
//! memory using Vec structures, providing fast, deterministic, isolated
//! execution with stable listing order.
//!
//! Like the real backend, the local repository enforces key uniqueness on
//! create, not-found on update/delete, and rejects flights referencing
//! unknown aircraft, pilot or crew codes. It does NOT refuse deletions of
//! referenced entities: that guard belongs to the service layer, which
//! must present the blocking flights instead of attempting the mutation.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::db::models::{AircraftInput, CrewMemberInput, FlightInput, PilotInput};
use crate::db::repository::{FleetRepository, RepositoryError, RepositoryResult};
use crate::models::{
    Aircraft, AircraftType, Base, BaseRef, CrewAssignment, CrewMember, Flight, Pilot, RawDate,
    RawTime,
};

/// In-memory fleet repository.
///
/// # Example
/// ```
/// use fleetdesk::db::LocalRepository;
/// use fleetdesk::db::repository::FleetRepository;
///
/// # async fn example() {
/// let repo = LocalRepository::new();
/// let flights = repo.list_flights().await.unwrap();
/// assert!(flights.is_empty());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Debug, Default)]
struct LocalData {
    aircraft: Vec<Aircraft>,
    pilots: Vec<Pilot>,
    crew_members: Vec<CrewMember>,
    flights: Vec<Flight>,
    bases: Vec<Base>,
    aircraft_types: Vec<AircraftType>,
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        let repo = Self::default();
        repo.data.write().unwrap().is_healthy = true;
        repo
    }

    // ==================== Seed helpers ====================
    // Insert records directly, bypassing create-time validation. Intended
    // for test setup and local development fixtures.

    pub fn store_base_impl(&self, base: Base) {
        self.data.write().unwrap().bases.push(base);
    }

    pub fn store_aircraft_type_impl(&self, aircraft_type: AircraftType) {
        self.data.write().unwrap().aircraft_types.push(aircraft_type);
    }

    pub fn store_aircraft_impl(&self, aircraft: Aircraft) {
        self.data.write().unwrap().aircraft.push(aircraft);
    }

    pub fn store_pilot_impl(&self, pilot: Pilot) {
        self.data.write().unwrap().pilots.push(pilot);
    }

    pub fn store_crew_member_impl(&self, crew_member: CrewMember) {
        self.data.write().unwrap().crew_members.push(crew_member);
    }

    pub fn store_flight_impl(&self, flight: Flight) {
        self.data.write().unwrap().flights.push(flight);
    }

    /// Flip the health flag reported by `health_check`.
    pub fn set_healthy_impl(&self, healthy: bool) {
        self.data.write().unwrap().is_healthy = healthy;
    }
}

impl LocalData {
    fn base_ref(&self, code: &str) -> Option<BaseRef> {
        self.bases.iter().find(|b| b.base_code == code).map(|b| BaseRef {
            base_code: b.base_code.clone(),
            name: b.name.clone(),
            location: b.location.clone(),
        })
    }

    fn aircraft_from_input(&self, code: &str, input: &AircraftInput) -> Aircraft {
        Aircraft {
            aircraft_code: code.to_string(),
            type_code: Some(input.type_code.clone()),
            base_code: Some(input.base_code.clone()),
            base: self.base_ref(&input.base_code),
            acquisition_date: input.acquisition_date.clone().map(RawDate::Text),
        }
    }

    fn pilot_from_input(&self, code: &str, input: &PilotInput) -> Pilot {
        Pilot {
            pilot_code: code.to_string(),
            name: Some(input.name.clone()),
            flight_hours: Some(input.flight_hours),
            base_code: Some(input.base_code.clone()),
            base: self.base_ref(&input.base_code),
            hire_date: input.hire_date.clone().map(RawDate::Text),
        }
    }

    fn crew_member_from_input(&self, code: &str, input: &CrewMemberInput) -> CrewMember {
        CrewMember {
            crew_code: code.to_string(),
            name: Some(input.name.clone()),
            base_code: Some(input.base_code.clone()),
            base: self.base_ref(&input.base_code),
            hire_date: input.hire_date.clone().map(RawDate::Text),
        }
    }

    fn flight_from_input(&self, number: &str, input: &FlightInput) -> RepositoryResult<Flight> {
        if !self.aircraft.iter().any(|a| a.aircraft_code == input.aircraft_code) {
            return Err(RepositoryError::ValidationError(format!(
                "unknown aircraft {}",
                input.aircraft_code
            )));
        }
        if !self.pilots.iter().any(|p| p.pilot_code == input.pilot_code) {
            return Err(RepositoryError::ValidationError(format!(
                "unknown pilot {}",
                input.pilot_code
            )));
        }
        if input.crew_codes.is_empty() {
            return Err(RepositoryError::ValidationError(
                "a flight must reference at least one crew member".to_string(),
            ));
        }

        let mut crew = Vec::with_capacity(input.crew_codes.len());
        for code in &input.crew_codes {
            let member = self
                .crew_members
                .iter()
                .find(|m| &m.crew_code == code)
                .ok_or_else(|| {
                    RepositoryError::ValidationError(format!("unknown crew member {code}"))
                })?;
            crew.push(CrewAssignment {
                crew_code: member.crew_code.clone(),
                name: member.name.clone(),
            });
        }

        Ok(Flight {
            flight_number: number.to_string(),
            origin: Some(input.origin.clone()),
            destination: Some(input.destination.clone()),
            flight_date: Some(RawDate::Text(input.flight_date.clone())),
            departure_time: Some(RawTime::Text(input.departure_time.clone())),
            status: Some(input.status.clone()),
            aircraft_code: Some(input.aircraft_code.clone()),
            pilot_code: Some(input.pilot_code.clone()),
            crew,
        })
    }
}

fn duplicate<E>(kind: &str, code: &str) -> Result<E, RepositoryError> {
    Err(RepositoryError::ValidationError(format!(
        "{kind} {code} already exists"
    )))
}

fn not_found<E>(kind: &str, code: &str) -> Result<E, RepositoryError> {
    Err(RepositoryError::NotFound(format!("{kind} {code}")))
}

#[async_trait]
impl FleetRepository for LocalRepository {
    // ==================== Aircraft ====================

    async fn list_aircraft(&self) -> RepositoryResult<Vec<Aircraft>> {
        Ok(self.data.read().unwrap().aircraft.clone())
    }

    async fn get_aircraft(&self, code: &str) -> RepositoryResult<Option<Aircraft>> {
        let data = self.data.read().unwrap();
        Ok(data.aircraft.iter().find(|a| a.aircraft_code == code).cloned())
    }

    async fn create_aircraft(&self, input: &AircraftInput) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        if data.aircraft.iter().any(|a| a.aircraft_code == input.aircraft_code) {
            return duplicate("aircraft", &input.aircraft_code);
        }
        let aircraft = data.aircraft_from_input(&input.aircraft_code, input);
        data.aircraft.push(aircraft);
        Ok(())
    }

    async fn update_aircraft(&self, code: &str, input: &AircraftInput) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let Some(index) = data.aircraft.iter().position(|a| a.aircraft_code == code) else {
            return not_found("aircraft", code);
        };
        let replacement = data.aircraft_from_input(code, input);
        data.aircraft[index] = replacement;
        Ok(())
    }

    async fn delete_aircraft(&self, code: &str) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let before = data.aircraft.len();
        data.aircraft.retain(|a| a.aircraft_code != code);
        if data.aircraft.len() == before {
            return not_found("aircraft", code);
        }
        Ok(())
    }

    // ==================== Pilots ====================

    async fn list_pilots(&self) -> RepositoryResult<Vec<Pilot>> {
        Ok(self.data.read().unwrap().pilots.clone())
    }

    async fn get_pilot(&self, code: &str) -> RepositoryResult<Option<Pilot>> {
        let data = self.data.read().unwrap();
        Ok(data.pilots.iter().find(|p| p.pilot_code == code).cloned())
    }

    async fn create_pilot(&self, input: &PilotInput) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        if data.pilots.iter().any(|p| p.pilot_code == input.pilot_code) {
            return duplicate("pilot", &input.pilot_code);
        }
        let pilot = data.pilot_from_input(&input.pilot_code, input);
        data.pilots.push(pilot);
        Ok(())
    }

    async fn update_pilot(&self, code: &str, input: &PilotInput) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let Some(index) = data.pilots.iter().position(|p| p.pilot_code == code) else {
            return not_found("pilot", code);
        };
        let replacement = data.pilot_from_input(code, input);
        data.pilots[index] = replacement;
        Ok(())
    }

    async fn delete_pilot(&self, code: &str) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let before = data.pilots.len();
        data.pilots.retain(|p| p.pilot_code != code);
        if data.pilots.len() == before {
            return not_found("pilot", code);
        }
        Ok(())
    }

    // ==================== Crew ====================

    async fn list_crew_members(&self) -> RepositoryResult<Vec<CrewMember>> {
        Ok(self.data.read().unwrap().crew_members.clone())
    }

    async fn get_crew_member(&self, code: &str) -> RepositoryResult<Option<CrewMember>> {
        let data = self.data.read().unwrap();
        Ok(data.crew_members.iter().find(|m| m.crew_code == code).cloned())
    }

    async fn create_crew_member(&self, input: &CrewMemberInput) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        if data.crew_members.iter().any(|m| m.crew_code == input.crew_code) {
            return duplicate("crew member", &input.crew_code);
        }
        let member = data.crew_member_from_input(&input.crew_code, input);
        data.crew_members.push(member);
        Ok(())
    }

    async fn update_crew_member(
        &self,
        code: &str,
        input: &CrewMemberInput,
    ) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let Some(index) = data.crew_members.iter().position(|m| m.crew_code == code) else {
            return not_found("crew member", code);
        };
        let replacement = data.crew_member_from_input(code, input);
        data.crew_members[index] = replacement;
        Ok(())
    }

    async fn delete_crew_member(&self, code: &str) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let before = data.crew_members.len();
        data.crew_members.retain(|m| m.crew_code != code);
        if data.crew_members.len() == before {
            return not_found("crew member", code);
        }
        Ok(())
    }

    // ==================== Flights ====================

    async fn list_flights(&self) -> RepositoryResult<Vec<Flight>> {
        Ok(self.data.read().unwrap().flights.clone())
    }

    async fn get_flight(&self, number: &str) -> RepositoryResult<Option<Flight>> {
        let data = self.data.read().unwrap();
        Ok(data.flights.iter().find(|f| f.flight_number == number).cloned())
    }

    async fn create_flight(&self, input: &FlightInput) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        if data.flights.iter().any(|f| f.flight_number == input.flight_number) {
            return duplicate("flight", &input.flight_number);
        }
        let flight = data.flight_from_input(&input.flight_number, input)?;
        data.flights.push(flight);
        Ok(())
    }

    async fn update_flight(&self, number: &str, input: &FlightInput) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let Some(index) = data.flights.iter().position(|f| f.flight_number == number) else {
            return not_found("flight", number);
        };
        let replacement = data.flight_from_input(number, input)?;
        data.flights[index] = replacement;
        Ok(())
    }

    async fn delete_flight(&self, number: &str) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        let before = data.flights.len();
        data.flights.retain(|f| f.flight_number != number);
        if data.flights.len() == before {
            return not_found("flight", number);
        }
        Ok(())
    }

    // ==================== Reference data ====================

    async fn list_bases(&self) -> RepositoryResult<Vec<Base>> {
        Ok(self.data.read().unwrap().bases.clone())
    }

    async fn list_aircraft_types(&self) -> RepositoryResult<Vec<AircraftType>> {
        Ok(self.data.read().unwrap().aircraft_types.clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }
}
