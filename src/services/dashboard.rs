//! Dashboard assembly: entity counters and the recent-flights table.
//!
//! The flights table filters by status, orders by recency and shows a
//! bounded number of rows; the filtered-but-untruncated count feeds the
//! "showing N of M" label.

use std::cmp::Reverse;

use crate::db::repository::{FleetRepository, RepositoryResult};
use crate::models::time::DateValue;
use crate::models::Flight;

/// Number of flights the dashboard table shows.
pub const DASHBOARD_LIMIT: usize = 10;

/// Status filter selected in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Scheduled,
    Completed,
    Cancelled,
}

impl StatusFilter {
    /// Parse the view layer's filter string, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "scheduled" => Some(StatusFilter::Scheduled),
            "completed" => Some(StatusFilter::Completed),
            "cancelled" => Some(StatusFilter::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Scheduled => "scheduled",
            StatusFilter::Completed => "completed",
            StatusFilter::Cancelled => "cancelled",
        }
    }

    /// Whether a flight's raw status string passes this filter.
    ///
    /// `All` passes everything, including statuses outside the known set
    /// and missing statuses; the specific filters are a case-insensitive
    /// exact match.
    pub fn matches(&self, status: Option<&str>) -> bool {
        match self {
            StatusFilter::All => true,
            specific => status
                .map(|s| s.trim().eq_ignore_ascii_case(specific.as_str()))
                .unwrap_or(false),
        }
    }
}

/// Ordered, truncated flight rows plus the untruncated match count.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleFlights {
    pub rows: Vec<Flight>,
    pub total_matching: usize,
}

/// Filter, order and truncate the dashboard flight list.
///
/// Flights are ordered most recent first; rows whose date is missing or
/// unparseable take the epoch value and therefore sink to the bottom.
/// Ties keep their snapshot order. Idempotent: re-applying the same
/// filter to its own output changes nothing.
pub fn visible_flights(all: &[Flight], filter: StatusFilter, limit: usize) -> VisibleFlights {
    let mut matching: Vec<&Flight> = all
        .iter()
        .filter(|f| filter.matches(f.status.as_deref()))
        .collect();
    let total_matching = matching.len();

    // Stable sort: equal keys keep input order.
    matching.sort_by_key(|f| Reverse(DateValue::parse(f.flight_date.as_ref()).sort_key()));

    VisibleFlights {
        rows: matching.into_iter().take(limit).cloned().collect(),
        total_matching,
    }
}

/// Entity counters shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardTotals {
    pub aircraft: usize,
    pub pilots: usize,
    pub crew_members: usize,
    pub flights: usize,
}

/// Everything the dashboard section renders from.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub totals: DashboardTotals,
    /// Full flight list; the view re-filters it through
    /// [`visible_flights`] without refetching.
    pub flights: Vec<Flight>,
}

/// Fetch the dashboard's counters and flight list concurrently.
pub async fn load_dashboard(repo: &dyn FleetRepository) -> RepositoryResult<DashboardData> {
    let (aircraft, pilots, crew_members, flights) = futures::try_join!(
        repo.list_aircraft(),
        repo.list_pilots(),
        repo.list_crew_members(),
        repo.list_flights(),
    )?;

    Ok(DashboardData {
        totals: DashboardTotals {
            aircraft: aircraft.len(),
            pilots: pilots.len(),
            crew_members: crew_members.len(),
            flights: flights.len(),
        },
        flights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawDate;

    fn flight(number: &str, date: Option<&str>, status: &str) -> Flight {
        Flight {
            flight_number: number.to_string(),
            origin: None,
            destination: None,
            flight_date: date.map(|d| RawDate::Text(d.to_string())),
            departure_time: None,
            status: Some(status.to_string()),
            aircraft_code: None,
            pilot_code: None,
            crew: Vec::new(),
        }
    }

    fn numbers(visible: &VisibleFlights) -> Vec<&str> {
        visible.rows.iter().map(|f| f.flight_number.as_str()).collect()
    }

    #[test]
    fn test_sorts_descending_with_missing_dates_last() {
        let flights = vec![
            flight("OLD", Some("2024-01-01"), "scheduled"),
            flight("NEW", Some("2024-06-01"), "scheduled"),
            flight("NONE", None, "scheduled"),
        ];

        let visible = visible_flights(&flights, StatusFilter::All, DASHBOARD_LIMIT);
        assert_eq!(numbers(&visible), vec!["NEW", "OLD", "NONE"]);
        assert_eq!(visible.total_matching, 3);
    }

    #[test]
    fn test_status_match_is_case_insensitive() {
        let flights = vec![
            flight("A", Some("2024-01-01"), "Scheduled"),
            flight("B", Some("2024-01-02"), "COMPLETED"),
            flight("C", Some("2024-01-03"), "cancelled"),
        ];

        let scheduled = visible_flights(&flights, StatusFilter::Scheduled, 10);
        assert_eq!(numbers(&scheduled), vec!["A"]);

        let completed = visible_flights(&flights, StatusFilter::Completed, 10);
        assert_eq!(numbers(&completed), vec!["B"]);
    }

    #[test]
    fn test_unknown_status_only_matches_all() {
        let flights = vec![flight("A", Some("2024-01-01"), "diverted")];

        assert_eq!(visible_flights(&flights, StatusFilter::All, 10).total_matching, 1);
        assert_eq!(
            visible_flights(&flights, StatusFilter::Scheduled, 10).total_matching,
            0
        );
    }

    #[test]
    fn test_truncates_after_sorting() {
        let flights: Vec<Flight> = (1..=15)
            .map(|i| flight(&format!("FL{i}"), Some(&format!("2024-01-{i:02}")), "scheduled"))
            .collect();

        let visible = visible_flights(&flights, StatusFilter::All, DASHBOARD_LIMIT);
        assert_eq!(visible.rows.len(), DASHBOARD_LIMIT);
        assert_eq!(visible.total_matching, 15);
        // Most recent first: the late-January flights survive the cut.
        assert_eq!(visible.rows[0].flight_number, "FL15");
        assert_eq!(visible.rows[9].flight_number, "FL6");
    }

    #[test]
    fn test_ties_keep_snapshot_order() {
        let flights = vec![
            flight("FIRST", Some("2024-03-05"), "scheduled"),
            flight("SECOND", Some("2024-03-05"), "scheduled"),
            flight("THIRD", Some("2024-03-05"), "scheduled"),
        ];

        let visible = visible_flights(&flights, StatusFilter::All, 10);
        assert_eq!(numbers(&visible), vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_idempotent_when_limit_covers_matches() {
        let flights = vec![
            flight("A", Some("2024-01-01"), "scheduled"),
            flight("B", None, "scheduled"),
            flight("C", Some("2024-06-01"), "scheduled"),
        ];

        let once = visible_flights(&flights, StatusFilter::All, 10);
        let twice = visible_flights(&once.rows, StatusFilter::All, 10);
        assert_eq!(once.rows, twice.rows);
        assert_eq!(twice.total_matching, once.rows.len());
    }

    #[test]
    fn test_empty_input() {
        let visible = visible_flights(&[], StatusFilter::Cancelled, 10);
        assert!(visible.rows.is_empty());
        assert_eq!(visible.total_matching, 0);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(StatusFilter::parse("ALL"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse(" scheduled "), Some(StatusFilter::Scheduled));
        assert_eq!(StatusFilter::parse("Completed"), Some(StatusFilter::Completed));
        assert_eq!(StatusFilter::parse("cancelled"), Some(StatusFilter::Cancelled));
        assert_eq!(StatusFilter::parse("delayed"), None);
    }
}
