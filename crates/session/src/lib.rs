//! Session crate for movie search.
//!
//! This crate holds the explicit view state (query, location, results,
//! error banner, selected movie) and the orchestrator that feeds it from
//! the aggregation pipeline.

pub mod orchestrator;
pub mod state;

pub use orchestrator::{SearchOrchestrator, Ticket};
pub use state::{Location, NO_RESULTS_MESSAGE, SessionError, ViewState};
