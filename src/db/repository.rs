//! Repository trait definition and error types.

use async_trait::async_trait;

use crate::models::{Aircraft, AircraftType, Base, CrewMember, Flight, Pilot};
use crate::remote::RemoteError;

use super::models::{AircraftInput, CrewMemberInput, FlightInput, PilotInput};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<RemoteError> for RepositoryError {
    fn from(e: RemoteError) -> Self {
        match e {
            RemoteError::Transport(msg) => RepositoryError::ConnectionError(msg),
            RemoteError::Api(msg) => RepositoryError::QueryError(msg),
            RemoteError::MalformedResponse(msg) => RepositoryError::QueryError(msg),
        }
    }
}

/// Abstract interface over the fleet data store.
///
/// `list_*` operations return full snapshots; there is no incremental
/// sync. `get_*` operations return `None` for unknown codes, while
/// mutations against unknown codes fail with [`RepositoryError::NotFound`].
#[async_trait]
pub trait FleetRepository: Send + Sync {
    // ==================== Aircraft ====================
    async fn list_aircraft(&self) -> RepositoryResult<Vec<Aircraft>>;
    async fn get_aircraft(&self, code: &str) -> RepositoryResult<Option<Aircraft>>;
    async fn create_aircraft(&self, input: &AircraftInput) -> RepositoryResult<()>;
    async fn update_aircraft(&self, code: &str, input: &AircraftInput) -> RepositoryResult<()>;
    async fn delete_aircraft(&self, code: &str) -> RepositoryResult<()>;

    // ==================== Pilots ====================
    async fn list_pilots(&self) -> RepositoryResult<Vec<Pilot>>;
    async fn get_pilot(&self, code: &str) -> RepositoryResult<Option<Pilot>>;
    async fn create_pilot(&self, input: &PilotInput) -> RepositoryResult<()>;
    async fn update_pilot(&self, code: &str, input: &PilotInput) -> RepositoryResult<()>;
    async fn delete_pilot(&self, code: &str) -> RepositoryResult<()>;

    // ==================== Crew ====================
    async fn list_crew_members(&self) -> RepositoryResult<Vec<CrewMember>>;
    async fn get_crew_member(&self, code: &str) -> RepositoryResult<Option<CrewMember>>;
    async fn create_crew_member(&self, input: &CrewMemberInput) -> RepositoryResult<()>;
    async fn update_crew_member(&self, code: &str, input: &CrewMemberInput)
        -> RepositoryResult<()>;
    async fn delete_crew_member(&self, code: &str) -> RepositoryResult<()>;

    // ==================== Flights ====================
    async fn list_flights(&self) -> RepositoryResult<Vec<Flight>>;
    async fn get_flight(&self, number: &str) -> RepositoryResult<Option<Flight>>;
    async fn create_flight(&self, input: &FlightInput) -> RepositoryResult<()>;
    async fn update_flight(&self, number: &str, input: &FlightInput) -> RepositoryResult<()>;
    async fn delete_flight(&self, number: &str) -> RepositoryResult<()>;

    // ==================== Reference data ====================
    async fn list_bases(&self) -> RepositoryResult<Vec<Base>>;
    async fn list_aircraft_types(&self) -> RepositoryResult<Vec<AircraftType>>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
