//! The session's load-generation guard: a slow response finishing after a
//! newer load must be discarded, never installed over fresher data.

mod support;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use fleetdesk::db::models::{AircraftInput, CrewMemberInput, FlightInput, PilotInput};
use fleetdesk::db::repositories::LocalRepository;
use fleetdesk::db::repository::{FleetRepository, RepositoryResult};
use fleetdesk::models::{Aircraft, AircraftType, Base, CrewMember, Flight, Pilot};
use fleetdesk::services::session::FleetSession;

/// Wrapper that makes `list_flights` slow while every other operation
/// answers immediately.
struct SlowFlights {
    inner: LocalRepository,
    delay: Duration,
}

#[async_trait]
impl FleetRepository for SlowFlights {
    async fn list_aircraft(&self) -> RepositoryResult<Vec<Aircraft>> {
        self.inner.list_aircraft().await
    }
    async fn get_aircraft(&self, code: &str) -> RepositoryResult<Option<Aircraft>> {
        self.inner.get_aircraft(code).await
    }
    async fn create_aircraft(&self, input: &AircraftInput) -> RepositoryResult<()> {
        self.inner.create_aircraft(input).await
    }
    async fn update_aircraft(&self, code: &str, input: &AircraftInput) -> RepositoryResult<()> {
        self.inner.update_aircraft(code, input).await
    }
    async fn delete_aircraft(&self, code: &str) -> RepositoryResult<()> {
        self.inner.delete_aircraft(code).await
    }

    async fn list_pilots(&self) -> RepositoryResult<Vec<Pilot>> {
        self.inner.list_pilots().await
    }
    async fn get_pilot(&self, code: &str) -> RepositoryResult<Option<Pilot>> {
        self.inner.get_pilot(code).await
    }
    async fn create_pilot(&self, input: &PilotInput) -> RepositoryResult<()> {
        self.inner.create_pilot(input).await
    }
    async fn update_pilot(&self, code: &str, input: &PilotInput) -> RepositoryResult<()> {
        self.inner.update_pilot(code, input).await
    }
    async fn delete_pilot(&self, code: &str) -> RepositoryResult<()> {
        self.inner.delete_pilot(code).await
    }

    async fn list_crew_members(&self) -> RepositoryResult<Vec<CrewMember>> {
        self.inner.list_crew_members().await
    }
    async fn get_crew_member(&self, code: &str) -> RepositoryResult<Option<CrewMember>> {
        self.inner.get_crew_member(code).await
    }
    async fn create_crew_member(&self, input: &CrewMemberInput) -> RepositoryResult<()> {
        self.inner.create_crew_member(input).await
    }
    async fn update_crew_member(
        &self,
        code: &str,
        input: &CrewMemberInput,
    ) -> RepositoryResult<()> {
        self.inner.update_crew_member(code, input).await
    }
    async fn delete_crew_member(&self, code: &str) -> RepositoryResult<()> {
        self.inner.delete_crew_member(code).await
    }

    async fn list_flights(&self) -> RepositoryResult<Vec<Flight>> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_flights().await
    }
    async fn get_flight(&self, number: &str) -> RepositoryResult<Option<Flight>> {
        self.inner.get_flight(number).await
    }
    async fn create_flight(&self, input: &FlightInput) -> RepositoryResult<()> {
        self.inner.create_flight(input).await
    }
    async fn update_flight(&self, number: &str, input: &FlightInput) -> RepositoryResult<()> {
        self.inner.update_flight(number, input).await
    }
    async fn delete_flight(&self, number: &str) -> RepositoryResult<()> {
        self.inner.delete_flight(number).await
    }

    async fn list_bases(&self) -> RepositoryResult<Vec<Base>> {
        self.inner.list_bases().await
    }
    async fn list_aircraft_types(&self) -> RepositoryResult<Vec<AircraftType>> {
        self.inner.list_aircraft_types().await
    }
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.inner.health_check().await
    }
}

#[tokio::test]
async fn test_slow_load_finishing_late_is_discarded() {
    let repo = SlowFlights {
        inner: support::seeded_repository(),
        delay: Duration::from_millis(50),
    };
    let session = FleetSession::new(Arc::new(repo));

    // The flights load starts first, then stalls on its fetch; the pilots
    // load starts afterwards and completes immediately.
    let (slow, fast) = tokio::join!(
        session.load_flights_section(),
        session.load_pilots_section()
    );

    assert!(fast.unwrap(), "newer load should install");
    assert!(!slow.unwrap(), "stale load should be discarded");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.pilots.len(), 2);
    // The stale flights result never landed.
    assert!(snapshot.flights.is_empty());
}

#[tokio::test]
async fn test_sequential_loads_both_install() {
    let repo = SlowFlights {
        inner: support::seeded_repository(),
        delay: Duration::from_millis(1),
    };
    let session = FleetSession::new(Arc::new(repo));

    assert!(session.load_flights_section().await.unwrap());
    assert!(session.load_pilots_section().await.unwrap());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.flights.len(), 1);
    assert_eq!(snapshot.pilots.len(), 2);
}
