//! GraphQL-backed repository implementation.
//!
//! Operation texts mirror the dashboard's queries: list operations select
//! the nested `base` relation so the eligibility filter can resolve base
//! codes without extra round trips, and mutations echo the natural key of
//! the record they touched.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::db::models::{AircraftInput, CrewMemberInput, FlightInput, PilotInput};
use crate::db::repository::{FleetRepository, RepositoryError, RepositoryResult};
use crate::models::{Aircraft, AircraftType, Base, CrewMember, Flight, Pilot};
use crate::remote::GraphqlClient;

const LIST_AIRCRAFT: &str = r#"
    query {
        aircraft {
            aircraft_code
            type_code
            base_code
            acquisition_date
            base { base_code name location }
        }
    }
"#;

const GET_AIRCRAFT: &str = r#"
    query GetAircraft($code: String!) {
        aircraftByCode(aircraft_code: $code) {
            aircraft_code
            type_code
            base_code
            acquisition_date
            base { base_code name location }
        }
    }
"#;

const CREATE_AIRCRAFT: &str = r#"
    mutation CreateAircraft($input: AircraftInput!) {
        createAircraft(input: $input) { aircraft_code }
    }
"#;

const UPDATE_AIRCRAFT: &str = r#"
    mutation UpdateAircraft($code: String!, $input: AircraftInput!) {
        updateAircraft(aircraft_code: $code, input: $input) { aircraft_code }
    }
"#;

const DELETE_AIRCRAFT: &str = r#"
    mutation DeleteAircraft($code: String!) {
        deleteAircraft(aircraft_code: $code)
    }
"#;

const LIST_PILOTS: &str = r#"
    query {
        pilots {
            pilot_code
            name
            flight_hours
            base_code
            hire_date
            base { base_code name location }
        }
    }
"#;

const GET_PILOT: &str = r#"
    query GetPilot($code: String!) {
        pilot(pilot_code: $code) {
            pilot_code
            name
            flight_hours
            base_code
            hire_date
            base { base_code name location }
        }
    }
"#;

const CREATE_PILOT: &str = r#"
    mutation CreatePilot($input: PilotInput!) {
        createPilot(input: $input) { pilot_code }
    }
"#;

const UPDATE_PILOT: &str = r#"
    mutation UpdatePilot($code: String!, $input: PilotInput!) {
        updatePilot(pilot_code: $code, input: $input) { pilot_code }
    }
"#;

const DELETE_PILOT: &str = r#"
    mutation DeletePilot($code: String!) {
        deletePilot(pilot_code: $code)
    }
"#;

const LIST_CREW: &str = r#"
    query {
        crewMembers {
            crew_code
            name
            base_code
            hire_date
            base { base_code name location }
        }
    }
"#;

const GET_CREW_MEMBER: &str = r#"
    query GetCrewMember($code: String!) {
        crewMember(crew_code: $code) {
            crew_code
            name
            base_code
            hire_date
            base { base_code name location }
        }
    }
"#;

const CREATE_CREW_MEMBER: &str = r#"
    mutation CreateCrewMember($input: CrewMemberInput!) {
        createCrewMember(input: $input) { crew_code }
    }
"#;

const UPDATE_CREW_MEMBER: &str = r#"
    mutation UpdateCrewMember($code: String!, $input: CrewMemberInput!) {
        updateCrewMember(crew_code: $code, input: $input) { crew_code }
    }
"#;

const DELETE_CREW_MEMBER: &str = r#"
    mutation DeleteCrewMember($code: String!) {
        deleteCrewMember(crew_code: $code)
    }
"#;

const LIST_FLIGHTS: &str = r#"
    query {
        flights {
            flight_number
            origin
            destination
            flight_date
            departure_time
            status
            aircraft_code
            pilot_code
            crew { crew_code name }
        }
    }
"#;

const GET_FLIGHT: &str = r#"
    query GetFlight($number: String!) {
        flight(flight_number: $number) {
            flight_number
            origin
            destination
            flight_date
            departure_time
            status
            aircraft_code
            pilot_code
            crew { crew_code name }
        }
    }
"#;

const CREATE_FLIGHT: &str = r#"
    mutation CreateFlight($input: FlightInput!) {
        createFlight(input: $input) { flight_number }
    }
"#;

const UPDATE_FLIGHT: &str = r#"
    mutation UpdateFlight($number: String!, $input: FlightInput!) {
        updateFlight(flight_number: $number, input: $input) { flight_number }
    }
"#;

const DELETE_FLIGHT: &str = r#"
    mutation DeleteFlight($number: String!) {
        deleteFlight(flight_number: $number)
    }
"#;

const LIST_BASES: &str = r#"
    query {
        bases { base_code name location }
    }
"#;

const LIST_AIRCRAFT_TYPES: &str = r#"
    query {
        aircraftTypes { type_code name }
    }
"#;

const HEALTH_PING: &str = r#"
    query {
        bases { base_code }
    }
"#;

/// Fleet repository backed by the remote GraphQL API.
#[derive(Debug, Clone)]
pub struct RemoteRepository {
    client: GraphqlClient,
}

impl RemoteRepository {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    /// The underlying client, e.g. to obtain its busy gauge.
    pub fn client(&self) -> &GraphqlClient {
        &self.client
    }

    async fn query(&self, operation: &str, variables: Value) -> RepositoryResult<Value> {
        Ok(self.client.execute(operation, variables).await?)
    }
}

/// Pull a list field out of a data payload; a missing or null field is an
/// empty list, matching how the dashboard treats absent collections.
fn list_field<T: DeserializeOwned>(data: &Value, name: &str) -> RepositoryResult<Vec<T>> {
    match data.get(name) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| RepositoryError::QueryError(format!("unexpected shape for {name}: {e}"))),
    }
}

/// Pull an optional single-record field out of a data payload.
fn record_field<T: DeserializeOwned>(data: &Value, name: &str) -> RepositoryResult<Option<T>> {
    match data.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| RepositoryError::QueryError(format!("unexpected shape for {name}: {e}"))),
    }
}

fn input_variables<T: serde::Serialize>(input: &T) -> Value {
    json!({ "input": input })
}

#[async_trait]
impl FleetRepository for RemoteRepository {
    // ==================== Aircraft ====================

    async fn list_aircraft(&self) -> RepositoryResult<Vec<Aircraft>> {
        let data = self.query(LIST_AIRCRAFT, json!({})).await?;
        list_field(&data, "aircraft")
    }

    async fn get_aircraft(&self, code: &str) -> RepositoryResult<Option<Aircraft>> {
        let data = self.query(GET_AIRCRAFT, json!({ "code": code })).await?;
        record_field(&data, "aircraftByCode")
    }

    async fn create_aircraft(&self, input: &AircraftInput) -> RepositoryResult<()> {
        self.query(CREATE_AIRCRAFT, input_variables(input)).await?;
        Ok(())
    }

    async fn update_aircraft(&self, code: &str, input: &AircraftInput) -> RepositoryResult<()> {
        self.query(UPDATE_AIRCRAFT, json!({ "code": code, "input": input }))
            .await?;
        Ok(())
    }

    async fn delete_aircraft(&self, code: &str) -> RepositoryResult<()> {
        self.query(DELETE_AIRCRAFT, json!({ "code": code })).await?;
        Ok(())
    }

    // ==================== Pilots ====================

    async fn list_pilots(&self) -> RepositoryResult<Vec<Pilot>> {
        let data = self.query(LIST_PILOTS, json!({})).await?;
        list_field(&data, "pilots")
    }

    async fn get_pilot(&self, code: &str) -> RepositoryResult<Option<Pilot>> {
        let data = self.query(GET_PILOT, json!({ "code": code })).await?;
        record_field(&data, "pilot")
    }

    async fn create_pilot(&self, input: &PilotInput) -> RepositoryResult<()> {
        self.query(CREATE_PILOT, input_variables(input)).await?;
        Ok(())
    }

    async fn update_pilot(&self, code: &str, input: &PilotInput) -> RepositoryResult<()> {
        self.query(UPDATE_PILOT, json!({ "code": code, "input": input }))
            .await?;
        Ok(())
    }

    async fn delete_pilot(&self, code: &str) -> RepositoryResult<()> {
        self.query(DELETE_PILOT, json!({ "code": code })).await?;
        Ok(())
    }

    // ==================== Crew ====================

    async fn list_crew_members(&self) -> RepositoryResult<Vec<CrewMember>> {
        let data = self.query(LIST_CREW, json!({})).await?;
        list_field(&data, "crewMembers")
    }

    async fn get_crew_member(&self, code: &str) -> RepositoryResult<Option<CrewMember>> {
        let data = self.query(GET_CREW_MEMBER, json!({ "code": code })).await?;
        record_field(&data, "crewMember")
    }

    async fn create_crew_member(&self, input: &CrewMemberInput) -> RepositoryResult<()> {
        self.query(CREATE_CREW_MEMBER, input_variables(input)).await?;
        Ok(())
    }

    async fn update_crew_member(
        &self,
        code: &str,
        input: &CrewMemberInput,
    ) -> RepositoryResult<()> {
        self.query(UPDATE_CREW_MEMBER, json!({ "code": code, "input": input }))
            .await?;
        Ok(())
    }

    async fn delete_crew_member(&self, code: &str) -> RepositoryResult<()> {
        self.query(DELETE_CREW_MEMBER, json!({ "code": code })).await?;
        Ok(())
    }

    // ==================== Flights ====================

    async fn list_flights(&self) -> RepositoryResult<Vec<Flight>> {
        let data = self.query(LIST_FLIGHTS, json!({})).await?;
        list_field(&data, "flights")
    }

    async fn get_flight(&self, number: &str) -> RepositoryResult<Option<Flight>> {
        let data = self.query(GET_FLIGHT, json!({ "number": number })).await?;
        record_field(&data, "flight")
    }

    async fn create_flight(&self, input: &FlightInput) -> RepositoryResult<()> {
        self.query(CREATE_FLIGHT, input_variables(input)).await?;
        Ok(())
    }

    async fn update_flight(&self, number: &str, input: &FlightInput) -> RepositoryResult<()> {
        self.query(UPDATE_FLIGHT, json!({ "number": number, "input": input }))
            .await?;
        Ok(())
    }

    async fn delete_flight(&self, number: &str) -> RepositoryResult<()> {
        self.query(DELETE_FLIGHT, json!({ "number": number })).await?;
        Ok(())
    }

    // ==================== Reference data ====================

    async fn list_bases(&self) -> RepositoryResult<Vec<Base>> {
        let data = self.query(LIST_BASES, json!({})).await?;
        list_field(&data, "bases")
    }

    async fn list_aircraft_types(&self) -> RepositoryResult<Vec<AircraftType>> {
        let data = self.query(LIST_AIRCRAFT_TYPES, json!({})).await?;
        list_field(&data, "aircraftTypes")
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.query(HEALTH_PING, json!({})).await.is_ok())
    }
}
