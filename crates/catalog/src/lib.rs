//! # Catalog Crate
//!
//! Domain types and wire parsing for movie search.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (SearchHit, MovieRecord, ResultSet, Query)
//! - **parser**: Decode OMDb JSON bodies into those types
//! - **error**: Error types for decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{parse_detail_response, Query};
//!
//! let query = Query::parse("  ");
//! assert!(query.is_defaults());
//!
//! let record = parse_detail_response(&body)?;
//! println!("{} ({})", record.title, record.year);
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{parse_detail_response, parse_search_response};
pub use types::{
    // Type aliases and constants
    MovieId,
    DEFAULT_TITLES,
    MAX_RESULTS_PER_QUERY,
    NOT_AVAILABLE,
    // Core types
    MovieRecord,
    Query,
    ResultSet,
    SearchHit,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parse() {
        assert_eq!(Query::parse(""), Query::Defaults);
        assert_eq!(Query::parse("   \t"), Query::Defaults);
        assert_eq!(Query::parse("Theri"), Query::Title("Theri".to_string()));

        // Non-empty input is kept exactly as typed
        assert_eq!(Query::parse(" Dada "), Query::Title(" Dada ".to_string()));
    }

    #[test]
    fn test_default_titles_order() {
        assert_eq!(DEFAULT_TITLES.len(), 8);
        assert_eq!(DEFAULT_TITLES[0], "Theri");
        assert_eq!(DEFAULT_TITLES[7], "Raja Rani");
    }

    #[test]
    fn test_new_record_is_not_available() {
        let record = MovieRecord::new("tt1", "Takkar");

        assert_eq!(record.year, NOT_AVAILABLE);
        assert!(record.poster().is_none());
        assert!(record.rating().is_none());
    }

    #[test]
    fn test_result_set_lookup() {
        let results = ResultSet::new(vec![
            MovieRecord::new("tt1", "Theri"),
            MovieRecord::new("tt2", "Retro"),
        ]);

        assert_eq!(results.len(), 2);
        assert_eq!(results.get("tt2").map(|r| r.title.as_str()), Some("Retro"));
        assert!(results.get("tt9").is_none());
        assert!(ResultSet::empty().is_empty());
    }

    #[test]
    fn test_result_set_serializes_as_array() {
        let results = ResultSet::new(vec![MovieRecord::new("tt1", "Anegan")]);
        let json = serde_json::to_value(&results).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["title"], "Anegan");
    }
}
