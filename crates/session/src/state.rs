//! View state for a movie search session.
//!
//! [`ViewState`] holds the query text, the chosen location, the current
//! results, the error banner and the movie whose details are open.

use std::fmt;
use std::str::FromStr;

use catalog::{MovieRecord, ResultSet};
use pipeline::AggregateError;
use serde::Serialize;
use thiserror::Error;

/// Banner shown when a user query has no hits at all
pub const NO_RESULTS_MESSAGE: &str = "No movies found.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown location '{0}'")]
    UnknownLocation(String),
}

/// Cities offered in the location picker.
///
/// The location is only echoed back ("Showing results for: ...");
/// it does not narrow the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    Chennai,
    Mumbai,
    Delhi,
    Bengaluru,
    Hyderabad,
    Kolkata,
    Pune,
    Ahmedabad,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Chennai,
        Location::Mumbai,
        Location::Delhi,
        Location::Bengaluru,
        Location::Hyderabad,
        Location::Kolkata,
        Location::Pune,
        Location::Ahmedabad,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Location::Chennai => "Chennai",
            Location::Mumbai => "Mumbai",
            Location::Delhi => "Delhi",
            Location::Bengaluru => "Bengaluru",
            Location::Hyderabad => "Hyderabad",
            Location::Kolkata => "Kolkata",
            Location::Pune => "Pune",
            Location::Ahmedabad => "Ahmedabad",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = SessionError;

    /// Case-insensitive match on the city name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Location::ALL
            .iter()
            .copied()
            .find(|location| location.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SessionError::UnknownLocation(s.to_string()))
    }
}

/// Everything the display layer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub query: String,
    pub location: Option<Location>,
    pub results: ResultSet,
    pub error: Option<String>,
    pub selected: Option<MovieRecord>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace results with the outcome of an aggregation run.
    ///
    /// Any outcome closes the details view. "No results" empties the grid
    /// and raises the error banner; anything else clears the banner.
    pub fn apply_outcome(&mut self, outcome: Result<ResultSet, AggregateError>) {
        match outcome {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(AggregateError::NoResultsForQuery { .. }) => {
                self.results = ResultSet::empty();
                self.error = Some(NO_RESULTS_MESSAGE.to_string());
            }
        }
        self.selected = None;
    }

    /// Open the details of the result with this IMDb id.
    pub fn select(&mut self, id: &str) -> Option<&MovieRecord> {
        let record = self.results.get(id)?.clone();
        self.selected = Some(record);
        self.selected.as_ref()
    }

    /// Open the details of the result at `index` in display order.
    pub fn select_index(&mut self, index: usize) -> Option<&MovieRecord> {
        let record = self.results.records().get(index)?.clone();
        self.selected = Some(record);
        self.selected.as_ref()
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// "Showing results for: X" line, when a location is chosen
    pub fn location_banner(&self) -> Option<String> {
        self.location
            .map(|location| format!("Showing results for: {}", location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> ResultSet {
        ResultSet::new(vec![
            MovieRecord::new("tt1", "Theri"),
            MovieRecord::new("tt2", "Dada"),
        ])
    }

    #[test]
    fn test_location_parse() {
        assert_eq!("chennai".parse::<Location>(), Ok(Location::Chennai));
        assert_eq!(" Pune ".parse::<Location>(), Ok(Location::Pune));
        assert_eq!(
            "Paris".parse::<Location>(),
            Err(SessionError::UnknownLocation("Paris".to_string()))
        );
    }

    #[test]
    fn test_location_banner() {
        let mut state = ViewState::new();
        assert!(state.location_banner().is_none());

        state.location = Some(Location::Bengaluru);
        assert_eq!(
            state.location_banner().as_deref(),
            Some("Showing results for: Bengaluru")
        );
    }

    #[test]
    fn test_successful_outcome_clears_error_and_selection() {
        let mut state = ViewState::new();
        state.error = Some(NO_RESULTS_MESSAGE.to_string());
        state.selected = Some(MovieRecord::new("tt0", "Old"));

        state.apply_outcome(Ok(results()));

        assert_eq!(state.results.len(), 2);
        assert!(state.error.is_none());
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_no_results_outcome() {
        let mut state = ViewState::new();
        state.apply_outcome(Ok(results()));
        state.select("tt1");

        state.apply_outcome(Err(AggregateError::NoResultsForQuery {
            query: "zzz".to_string(),
        }));

        assert!(state.results.is_empty());
        assert_eq!(state.error.as_deref(), Some(NO_RESULTS_MESSAGE));
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let mut state = ViewState::new();
        state.apply_outcome(Ok(ResultSet::empty()));

        assert!(state.results.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_select_and_close() {
        let mut state = ViewState::new();
        state.apply_outcome(Ok(results()));

        assert_eq!(state.select("tt2").map(|r| r.title.as_str()), Some("Dada"));
        assert_eq!(state.selected.as_ref().map(|r| r.id.as_str()), Some("tt2"));

        // Unknown ids leave the current selection alone
        assert!(state.select("tt9").is_none());
        assert_eq!(state.selected.as_ref().map(|r| r.id.as_str()), Some("tt2"));

        state.close_details();
        assert!(state.selected.is_none());

        assert_eq!(state.select_index(0).map(|r| r.id.as_str()), Some("tt1"));
        assert!(state.select_index(5).is_none());
    }
}
