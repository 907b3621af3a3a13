//! Base-eligibility filtering for the flight form.
//!
//! Pilots and crew assignable to a flight must share the selected
//! aircraft's base. With no aircraft selected the candidate lists are
//! unrestricted. An empty filtered result stays empty: it signals "no
//! eligible candidates for this base" and must never fall back to the
//! unfiltered list.

use crate::models::{Aircraft, CrewMember, HomeBased, Pilot};

/// Entries whose resolved base code equals `base`, preserving relative
/// order; the full input when `base` is `None`.
fn filter_by_base<'a, T: HomeBased>(base: Option<&str>, items: &'a [T]) -> Vec<&'a T> {
    match base {
        None => items.iter().collect(),
        Some(code) => items
            .iter()
            .filter(|item| item.base_code() == Some(code))
            .collect(),
    }
}

/// Pilots eligible for an aircraft stationed at `aircraft_base`.
pub fn eligible_pilots<'a>(aircraft_base: Option<&str>, pilots: &'a [Pilot]) -> Vec<&'a Pilot> {
    filter_by_base(aircraft_base, pilots)
}

/// Crew members eligible for an aircraft stationed at `aircraft_base`.
pub fn eligible_crew<'a>(
    aircraft_base: Option<&str>,
    crew: &'a [CrewMember],
) -> Vec<&'a CrewMember> {
    filter_by_base(aircraft_base, crew)
}

/// Candidate lists for the flight form, recomputed whenever the selected
/// aircraft changes.
#[derive(Debug)]
pub struct FormCandidates<'a> {
    pub pilots: Vec<&'a Pilot>,
    pub crew: Vec<&'a CrewMember>,
    /// Base code the lists were restricted to, when an aircraft with a
    /// resolvable base is selected.
    pub base_filter: Option<String>,
}

impl FormCandidates<'_> {
    /// Caption data for the form: "filtered by base B" vs "showing all",
    /// with the available count per list.
    pub fn pilot_count(&self) -> usize {
        self.pilots.len()
    }

    pub fn crew_count(&self) -> usize {
        self.crew.len()
    }
}

/// Compute both candidate lists from the currently selected aircraft.
///
/// An aircraft without a resolvable base behaves like no selection: the
/// base constraint cannot be evaluated, so the lists stay unrestricted.
pub fn form_candidates<'a>(
    selected_aircraft: Option<&Aircraft>,
    pilots: &'a [Pilot],
    crew: &'a [CrewMember],
) -> FormCandidates<'a> {
    let base_filter = selected_aircraft
        .and_then(|a| a.base_code())
        .map(str::to_string);

    FormCandidates {
        pilots: eligible_pilots(base_filter.as_deref(), pilots),
        crew: eligible_crew(base_filter.as_deref(), crew),
        base_filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BaseRef;

    fn pilot(code: &str, base: Option<&str>) -> Pilot {
        Pilot {
            pilot_code: code.to_string(),
            name: Some(code.to_string()),
            flight_hours: Some(100),
            base_code: base.map(str::to_string),
            base: None,
            hire_date: None,
        }
    }

    fn crew_member(code: &str, base: Option<&str>) -> CrewMember {
        CrewMember {
            crew_code: code.to_string(),
            name: Some(code.to_string()),
            base_code: base.map(str::to_string),
            base: None,
            hire_date: None,
        }
    }

    #[test]
    fn test_no_base_is_identity() {
        let pilots = vec![pilot("P1", Some("MAD")), pilot("P2", Some("BCN"))];
        let eligible = eligible_pilots(None, &pilots);
        assert_eq!(eligible.len(), 2);
        assert_eq!(eligible[0].pilot_code, "P1");
        assert_eq!(eligible[1].pilot_code, "P2");
    }

    #[test]
    fn test_filter_keeps_matching_base_in_order() {
        let pilots = vec![
            pilot("P1", Some("MAD")),
            pilot("P2", Some("BCN")),
            pilot("P3", Some("MAD")),
            pilot("P4", None),
        ];
        let eligible = eligible_pilots(Some("MAD"), &pilots);
        let codes: Vec<&str> = eligible.iter().map(|p| p.pilot_code.as_str()).collect();
        assert_eq!(codes, vec!["P1", "P3"]);
    }

    #[test]
    fn test_empty_result_does_not_fall_back() {
        let pilots = vec![pilot("P1", Some("MAD")), pilot("P2", Some("BCN"))];
        let eligible = eligible_pilots(Some("BASE-X"), &pilots);
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_nested_base_relation_counts() {
        let mut member = crew_member("C1", None);
        member.base = Some(BaseRef {
            base_code: "MAD".to_string(),
            name: None,
            location: None,
        });
        let crew = vec![member, crew_member("C2", Some("BCN"))];

        let eligible = eligible_crew(Some("MAD"), &crew);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].crew_code, "C1");
    }

    #[test]
    fn test_form_candidates_tracks_selected_base() {
        let aircraft = Aircraft {
            aircraft_code: "A1".to_string(),
            type_code: None,
            base_code: Some("MAD".to_string()),
            base: None,
            acquisition_date: None,
        };
        let pilots = vec![pilot("P1", Some("MAD")), pilot("P2", Some("BCN"))];
        let crew = vec![crew_member("C1", Some("BCN"))];

        let candidates = form_candidates(Some(&aircraft), &pilots, &crew);
        assert_eq!(candidates.base_filter.as_deref(), Some("MAD"));
        assert_eq!(candidates.pilot_count(), 1);
        // No crew at MAD: the empty state is reported, not bypassed.
        assert_eq!(candidates.crew_count(), 0);
    }

    #[test]
    fn test_aircraft_without_base_is_unrestricted() {
        let aircraft = Aircraft {
            aircraft_code: "A1".to_string(),
            type_code: None,
            base_code: None,
            base: None,
            acquisition_date: None,
        };
        let pilots = vec![pilot("P1", Some("MAD")), pilot("P2", Some("BCN"))];

        let candidates = form_candidates(Some(&aircraft), &pilots, &[]);
        assert!(candidates.base_filter.is_none());
        assert_eq!(candidates.pilot_count(), 2);
    }
}
