//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Once;

use fleetdesk::db::repositories::LocalRepository;
use fleetdesk::models::{
    Aircraft, AircraftType, Base, BaseRef, CrewAssignment, CrewMember, Flight, Pilot, RawDate,
};

static TRACING: Once = Once::new();

/// Route crate logs to the test writer, honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn base(code: &str, name: &str) -> Base {
    Base {
        base_code: code.to_string(),
        name: Some(name.to_string()),
        location: Some(name.to_string()),
    }
}

pub fn aircraft(code: &str, type_code: &str, base_code: &str) -> Aircraft {
    Aircraft {
        aircraft_code: code.to_string(),
        type_code: Some(type_code.to_string()),
        base_code: Some(base_code.to_string()),
        base: Some(BaseRef {
            base_code: base_code.to_string(),
            name: None,
            location: None,
        }),
        acquisition_date: Some(RawDate::Text("2020-01-01".to_string())),
    }
}

pub fn pilot(code: &str, name: &str, base_code: &str) -> Pilot {
    Pilot {
        pilot_code: code.to_string(),
        name: Some(name.to_string()),
        flight_hours: Some(1500),
        base_code: Some(base_code.to_string()),
        base: None,
        hire_date: Some(RawDate::Text("2019-06-15".to_string())),
    }
}

pub fn crew_member(code: &str, name: &str, base_code: &str) -> CrewMember {
    CrewMember {
        crew_code: code.to_string(),
        name: Some(name.to_string()),
        base_code: Some(base_code.to_string()),
        base: None,
        hire_date: Some(RawDate::Text("2021-03-01".to_string())),
    }
}

pub fn flight(
    number: &str,
    date: &str,
    status: &str,
    aircraft_code: &str,
    pilot_code: &str,
    crew_codes: &[&str],
) -> Flight {
    Flight {
        flight_number: number.to_string(),
        origin: Some("MAD".to_string()),
        destination: Some("LPA".to_string()),
        flight_date: Some(RawDate::Text(date.to_string())),
        departure_time: None,
        status: Some(status.to_string()),
        aircraft_code: Some(aircraft_code.to_string()),
        pilot_code: Some(pilot_code.to_string()),
        crew: crew_codes
            .iter()
            .map(|code| CrewAssignment {
                crew_code: code.to_string(),
                name: None,
            })
            .collect(),
    }
}

/// Repository seeded with two bases, two aircraft, two pilots, two crew
/// members and one scheduled flight (FL100 = A1 + P1 + C1, all at MAD).
pub fn seeded_repository() -> LocalRepository {
    init_tracing();
    let repo = LocalRepository::new();

    repo.store_base_impl(base("MAD", "Madrid"));
    repo.store_base_impl(base("BCN", "Barcelona"));
    repo.store_aircraft_type_impl(AircraftType {
        type_code: "B737".to_string(),
        name: Some("Boeing 737".to_string()),
    });

    repo.store_aircraft_impl(aircraft("A1", "B737", "MAD"));
    repo.store_aircraft_impl(aircraft("A2", "B737", "BCN"));

    repo.store_pilot_impl(pilot("P1", "Ana Torres", "MAD"));
    repo.store_pilot_impl(pilot("P2", "Luis Vega", "BCN"));

    repo.store_crew_member_impl(crew_member("C1", "Eva Ruiz", "MAD"));
    repo.store_crew_member_impl(crew_member("C2", "Marc Pons", "BCN"));

    repo.store_flight_impl(flight(
        "FL100",
        "2024-06-01",
        "scheduled",
        "A1",
        "P1",
        &["C1"],
    ));

    repo
}
