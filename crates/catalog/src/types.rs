//! Core domain types for movie search.
//!
//! This module defines the records that flow between the gateway, the
//! aggregation pipeline and the display layer.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases & Constants
// =============================================================================

/// IMDb identifier of a title (e.g. "tt0111161")
pub type MovieId = String;

/// Marker the movie database uses for a value it does not have
pub const NOT_AVAILABLE: &str = "N/A";

/// Titles loaded when the user submits an empty query (or on start-up).
///
/// Order matters: the accumulator is filled in this order before shuffling.
pub const DEFAULT_TITLES: [&str; 8] = [
    "Theri",
    "Retro",
    "Dada",
    "Anegan",
    "Takkar",
    "Sivappu Manjal Pachai",
    "Iraivi",
    "Raja Rani",
];

/// Maximum number of records a single query contributes to a ResultSet
pub const MAX_RESULTS_PER_QUERY: usize = 5;

// =============================================================================
// Search Types
// =============================================================================

/// Minimal record returned by a title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: MovieId,
    pub title: String,
    /// Brief year string from the search listing; not used for display
    pub year: Option<String>,
}

impl SearchHit {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: None,
        }
    }
}

/// What the user asked for.
///
/// An empty (or whitespace-only) query means "show the default titles".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Defaults,
    Title(String),
}

impl Query {
    /// Interpret raw user input.
    ///
    /// The emptiness check trims, but a non-empty query is kept exactly as
    /// typed so the search text matches what the user entered.
    pub fn parse(input: &str) -> Self {
        if input.trim().is_empty() {
            Query::Defaults
        } else {
            Query::Title(input.to_string())
        }
    }

    pub fn is_defaults(&self) -> bool {
        matches!(self, Query::Defaults)
    }
}

impl From<&str> for Query {
    fn from(input: &str) -> Self {
        Query::parse(input)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Defaults => write!(f, "<default titles>"),
            Query::Title(text) => write!(f, "{}", text),
        }
    }
}

// =============================================================================
// Detail Types
// =============================================================================

/// Full detail record for one movie.
///
/// Fields the database does not know are stored as `"N/A"`, which is what
/// the API itself sends. Use [`MovieRecord::poster`] and
/// [`MovieRecord::rating`] to get them as `Option`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub rating: String,
    pub genre: String,
    pub runtime: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
}

impl MovieRecord {
    /// Create a record with every optional field set to `"N/A"`.
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: NOT_AVAILABLE.to_string(),
            poster_url: NOT_AVAILABLE.to_string(),
            rating: NOT_AVAILABLE.to_string(),
            genre: NOT_AVAILABLE.to_string(),
            runtime: NOT_AVAILABLE.to_string(),
            director: NOT_AVAILABLE.to_string(),
            actors: NOT_AVAILABLE.to_string(),
            plot: NOT_AVAILABLE.to_string(),
        }
    }

    /// Poster URL, if the database has one
    pub fn poster(&self) -> Option<&str> {
        available(&self.poster_url)
    }

    /// IMDb rating, if the database has one
    pub fn rating(&self) -> Option<&str> {
        available(&self.rating)
    }
}

fn available(value: &str) -> Option<&str> {
    if value == NOT_AVAILABLE || value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// =============================================================================
// ResultSet
// =============================================================================

/// The shuffled collection of detail records produced by one aggregation run.
///
/// A ResultSet is always rebuilt from scratch; it has no append or merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<MovieRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    /// Find a record by its IMDb id
    pub fn get(&self, id: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn into_records(self) -> Vec<MovieRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
