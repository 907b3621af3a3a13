//! # Fleetdesk
//!
//! Headless core for an airline fleet-operations dashboard.
//!
//! This crate owns everything behind the rendering layer of the dashboard:
//! the fleet data model, the remote data access layer, the in-memory session
//! snapshot, and the integrity/filtering/validation engine. The view layer
//! (tables, modals, form wiring) is an external collaborator that receives
//! already-computed data from this crate.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain entities (aircraft, pilots, crew, flights, bases)
//!   and date/time normalization for display and form population
//! - [`remote`]: GraphQL-over-HTTP client with envelope unwrapping and a
//!   busy gauge for the view layer's loading indicator
//! - [`db`]: Repository pattern over the fleet data: a remote backend and
//!   an in-memory backend for tests and local development
//! - [`services`]: Business logic: the deletion integrity guard,
//!   base-eligibility filtering, dashboard assembly, form validation, and
//!   the per-session snapshot state
//!
//! ## Guarantees
//!
//! - Deleting an aircraft, pilot or crew member is refused while any flight
//!   references it; callers receive the blocking flight list instead.
//! - Pilot and crew candidates for a flight are restricted to the selected
//!   aircraft's base; with no aircraft selected the lists are unrestricted.
//! - All filtering and normalization routines are pure and never panic on
//!   malformed remote data.

pub mod db;
pub mod models;
pub mod remote;
pub mod services;

pub use db::repository::{FleetRepository, RepositoryError, RepositoryResult};
pub use models::{Aircraft, AircraftType, Base, BaseRef, CrewMember, Flight, HomeBased, Pilot};
pub use remote::RemoteError;
pub use services::dashboard::{visible_flights, StatusFilter, VisibleFlights};
pub use services::dependents::{has_dependent_flights, DeletionOutcome, EntityRef};
pub use services::eligibility::{eligible_crew, eligible_pilots};
pub use services::session::FleetSession;
