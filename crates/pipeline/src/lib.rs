//! Aggregation pipeline for movie search.
//!
//! This crate provides:
//! - MovieGateway trait for the movie database lookups
//! - Aggregator, which turns a query into a shuffled ResultSet
//! - Fisher–Yates shuffle helpers
//!
//! ## Architecture
//! A run processes a query in stages:
//! 1. Search the gateway (once per default title, or once for the query)
//! 2. Enrich the selected hits with full details, strictly one after another
//! 3. Shuffle the accumulated records into the final ResultSet
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::Aggregator;
//! use catalog::Query;
//!
//! let aggregator = Aggregator::new(gateway);
//! match aggregator.aggregate(&Query::parse(input)).await {
//!     Ok(results) => render(&results),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod aggregator;
pub mod shuffle;
pub mod traits;

// Re-export main types
pub use aggregator::{AggregateError, AggregationStage, Aggregator};
pub use shuffle::{shuffle, shuffle_by};
pub use traits::MovieGateway;
