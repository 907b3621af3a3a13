//! Per-session snapshot state and section loaders.
//!
//! [`FleetSession`] is the context object handed to every UI action: it
//! owns the in-memory snapshot of entity lists most recently fetched from
//! the repository. Each section load replaces its lists wholesale; nothing
//! is ever partially merged. A failed load leaves the prior snapshot
//! unchanged.
//!
//! Loads are stamped with a generation counter. A load only installs its
//! result if no newer load started while it was in flight, so a slow
//! response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard};

use tracing::debug;

use crate::db::models::{AircraftInput, CrewMemberInput, FlightInput, PilotInput};
use crate::db::repository::{FleetRepository, RepositoryResult};
use crate::models::{Aircraft, AircraftType, Base, CrewMember, Flight, Pilot};

use super::dashboard::{self, DashboardData};
use super::dependents::{guard_delete, DeletionOutcome, EntityRef};

/// In-memory copy of the entity lists most recently fetched.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub aircraft: Vec<Aircraft>,
    pub pilots: Vec<Pilot>,
    pub crew_members: Vec<CrewMember>,
    pub flights: Vec<Flight>,
    pub bases: Vec<Base>,
    pub aircraft_types: Vec<AircraftType>,
}

/// Session context for the dashboard.
///
/// Created once per page session; loaders replace snapshot sections
/// wholesale, and accessors hand the view layer read access to the
/// current lists.
pub struct FleetSession {
    repo: Arc<dyn FleetRepository>,
    snapshot: RwLock<Snapshot>,
    load_counter: AtomicU64,
}

impl std::fmt::Debug for FleetSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetSession")
            .field("loads", &self.load_counter.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl FleetSession {
    pub fn new(repo: Arc<dyn FleetRepository>) -> Self {
        Self {
            repo,
            snapshot: RwLock::new(Snapshot::default()),
            load_counter: AtomicU64::new(0),
        }
    }

    /// Build a session over the repository selected by the default
    /// configuration lookup.
    pub fn from_default_config() -> anyhow::Result<Self> {
        Ok(Self::new(crate::db::init_default_repository()?))
    }

    /// The underlying repository.
    pub fn repository(&self) -> &Arc<dyn FleetRepository> {
        &self.repo
    }

    /// Read access to the current snapshot.
    pub fn snapshot(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap()
    }

    fn begin_load(&self) -> u64 {
        self.load_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a completed load unless a newer one has started since.
    /// Returns whether the snapshot was updated.
    fn install(&self, generation: u64, apply: impl FnOnce(&mut Snapshot)) -> bool {
        if self.load_counter.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale load result");
            return false;
        }
        let mut snapshot = self.snapshot.write().unwrap();
        apply(&mut snapshot);
        true
    }

    // ==================== Section loaders ====================

    /// Load the aircraft section: aircraft plus the reference data its
    /// form needs (bases, aircraft types).
    pub async fn load_aircraft_section(&self) -> RepositoryResult<bool> {
        let generation = self.begin_load();
        let (aircraft, bases, aircraft_types) = futures::try_join!(
            self.repo.list_aircraft(),
            self.repo.list_bases(),
            self.repo.list_aircraft_types(),
        )?;
        Ok(self.install(generation, |snapshot| {
            snapshot.aircraft = aircraft;
            snapshot.bases = bases;
            snapshot.aircraft_types = aircraft_types;
        }))
    }

    /// Load the pilots section: pilots plus bases for the form.
    pub async fn load_pilots_section(&self) -> RepositoryResult<bool> {
        let generation = self.begin_load();
        let (pilots, bases) =
            futures::try_join!(self.repo.list_pilots(), self.repo.list_bases())?;
        Ok(self.install(generation, |snapshot| {
            snapshot.pilots = pilots;
            snapshot.bases = bases;
        }))
    }

    /// Load the crew section: crew members plus bases for the form.
    pub async fn load_crew_section(&self) -> RepositoryResult<bool> {
        let generation = self.begin_load();
        let (crew_members, bases) =
            futures::try_join!(self.repo.list_crew_members(), self.repo.list_bases())?;
        Ok(self.install(generation, |snapshot| {
            snapshot.crew_members = crew_members;
            snapshot.bases = bases;
        }))
    }

    /// Load the flights section. Also fills in whichever of the aircraft,
    /// pilot and crew lists are still empty: the flight table and form
    /// resolve names and bases from them.
    pub async fn load_flights_section(&self) -> RepositoryResult<bool> {
        let generation = self.begin_load();
        let flights = self.repo.list_flights().await?;

        let (need_aircraft, need_pilots, need_crew) = {
            let snapshot = self.snapshot.read().unwrap();
            (
                snapshot.aircraft.is_empty(),
                snapshot.pilots.is_empty(),
                snapshot.crew_members.is_empty(),
            )
        };

        let aircraft = if need_aircraft {
            Some(self.repo.list_aircraft().await?)
        } else {
            None
        };
        let pilots = if need_pilots {
            Some(self.repo.list_pilots().await?)
        } else {
            None
        };
        let crew_members = if need_crew {
            Some(self.repo.list_crew_members().await?)
        } else {
            None
        };

        Ok(self.install(generation, |snapshot| {
            snapshot.flights = flights;
            if let Some(aircraft) = aircraft {
                snapshot.aircraft = aircraft;
            }
            if let Some(pilots) = pilots {
                snapshot.pilots = pilots;
            }
            if let Some(crew_members) = crew_members {
                snapshot.crew_members = crew_members;
            }
        }))
    }

    /// Make sure the flight form has aircraft, pilot and crew lists to
    /// offer. Returns whether aircraft and pilots are both non-empty; the
    /// form cannot open without them.
    pub async fn ensure_flight_form_data(&self) -> RepositoryResult<bool> {
        {
            let snapshot = self.snapshot.read().unwrap();
            if !snapshot.aircraft.is_empty()
                && !snapshot.pilots.is_empty()
                && !snapshot.crew_members.is_empty()
            {
                return Ok(true);
            }
        }

        let generation = self.begin_load();
        let (aircraft, pilots, crew_members) = futures::try_join!(
            self.repo.list_aircraft(),
            self.repo.list_pilots(),
            self.repo.list_crew_members(),
        )?;
        self.install(generation, |snapshot| {
            snapshot.aircraft = aircraft;
            snapshot.pilots = pilots;
            snapshot.crew_members = crew_members;
        });

        let snapshot = self.snapshot.read().unwrap();
        Ok(!snapshot.aircraft.is_empty() && !snapshot.pilots.is_empty())
    }

    /// Fetch the dashboard's counters and flight list. The result goes to
    /// the caller, not into the snapshot; the view re-filters it through
    /// [`dashboard::visible_flights`] as the user changes the status
    /// filter.
    pub async fn load_dashboard(&self) -> RepositoryResult<DashboardData> {
        dashboard::load_dashboard(self.repo.as_ref()).await
    }

    // ==================== Mutations ====================

    /// Create or update an aircraft, then reload its section.
    pub async fn save_aircraft(
        &self,
        input: &AircraftInput,
        editing: bool,
    ) -> RepositoryResult<()> {
        if editing {
            self.repo.update_aircraft(&input.aircraft_code, input).await?;
        } else {
            self.repo.create_aircraft(input).await?;
        }
        self.load_aircraft_section().await?;
        Ok(())
    }

    /// Create or update a pilot, then reload its section.
    pub async fn save_pilot(&self, input: &PilotInput, editing: bool) -> RepositoryResult<()> {
        if editing {
            self.repo.update_pilot(&input.pilot_code, input).await?;
        } else {
            self.repo.create_pilot(input).await?;
        }
        self.load_pilots_section().await?;
        Ok(())
    }

    /// Create or update a crew member, then reload its section.
    pub async fn save_crew_member(
        &self,
        input: &CrewMemberInput,
        editing: bool,
    ) -> RepositoryResult<()> {
        if editing {
            self.repo.update_crew_member(&input.crew_code, input).await?;
        } else {
            self.repo.create_crew_member(input).await?;
        }
        self.load_crew_section().await?;
        Ok(())
    }

    /// Create or update a flight, then reload its section.
    pub async fn save_flight(&self, input: &FlightInput, editing: bool) -> RepositoryResult<()> {
        if editing {
            self.repo.update_flight(&input.flight_number, input).await?;
        } else {
            self.repo.create_flight(input).await?;
        }
        self.load_flights_section().await?;
        Ok(())
    }

    /// Guarded aircraft deletion; reloads the section when it went through.
    pub async fn delete_aircraft(&self, code: &str) -> RepositoryResult<DeletionOutcome> {
        let outcome = guard_delete(self.repo.as_ref(), EntityRef::Aircraft(code)).await?;
        if outcome == DeletionOutcome::Deleted {
            self.load_aircraft_section().await?;
        }
        Ok(outcome)
    }

    /// Guarded pilot deletion; reloads the section when it went through.
    pub async fn delete_pilot(&self, code: &str) -> RepositoryResult<DeletionOutcome> {
        let outcome = guard_delete(self.repo.as_ref(), EntityRef::Pilot(code)).await?;
        if outcome == DeletionOutcome::Deleted {
            self.load_pilots_section().await?;
        }
        Ok(outcome)
    }

    /// Guarded crew-member deletion; reloads the section when it went
    /// through.
    pub async fn delete_crew_member(&self, code: &str) -> RepositoryResult<DeletionOutcome> {
        let outcome = guard_delete(self.repo.as_ref(), EntityRef::CrewMember(code)).await?;
        if outcome == DeletionOutcome::Deleted {
            self.load_crew_section().await?;
        }
        Ok(outcome)
    }

    /// Unguarded flight deletion (nothing references a flight), then
    /// reload.
    pub async fn delete_flight(&self, number: &str) -> RepositoryResult<()> {
        self.repo.delete_flight(number).await?;
        self.load_flights_section().await?;
        Ok(())
    }
}
