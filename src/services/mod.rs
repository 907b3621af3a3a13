//! Service layer for business logic and orchestration.
//!
//! Services sit between the repository layer and the view layer: they
//! compute what the dashboard shows (visible flights, eligible candidates,
//! blocking lists, field errors) and orchestrate the fetches behind it.

pub mod dashboard;
pub mod dependents;
pub mod eligibility;
pub mod session;
pub mod validation;

pub use dashboard::{load_dashboard, visible_flights, DashboardData, StatusFilter, VisibleFlights};
pub use dependents::{
    blocking_flights, guard_delete, has_dependent_flights, DeletionOutcome, EntityRef,
    FlightSummary,
};
pub use eligibility::{eligible_crew, eligible_pilots, form_candidates, FormCandidates};
pub use session::{FleetSession, Snapshot};
pub use validation::{
    build_aircraft_input, build_crew_member_input, build_flight_input, build_pilot_input,
    validate, FieldError, FieldKind, FieldRule, FormValues,
};
