//! # Search Orchestrator
//!
//! Connects the aggregation pipeline to the view state:
//! 1. Hand out a ticket for every submitted search
//! 2. Run the aggregation pipeline
//! 3. Commit the outcome, unless a newer search was submitted meanwhile
//!
//! Step 3 is what keeps a slow, stale search from overwriting the results
//! of a newer one that happened to finish first.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use catalog::{MovieRecord, Query, ResultSet};
use pipeline::{AggregateError, Aggregator};
use tracing::{debug, info};

use crate::state::{Location, ViewState};

/// Sequence number of one submitted search
pub type Ticket = u64;

/// Owns the view state and decides which run gets to update it.
#[derive(Clone)]
pub struct SearchOrchestrator {
    aggregator: Arc<Aggregator>,
    state: Arc<Mutex<ViewState>>,
    latest: Arc<AtomicU64>,
}

impl SearchOrchestrator {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            state: Arc::new(Mutex::new(ViewState::new())),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a new run: record the query text and issue its ticket.
    ///
    /// Every ticket issued before this one becomes stale.
    pub fn begin(&self, input: &str) -> Ticket {
        let mut state = self.lock_state();
        state.query = input.to_string();
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a run's outcome if `ticket` is still the newest one.
    ///
    /// # Returns
    /// `true` if the state was updated, `false` if the outcome was stale
    /// and has been discarded.
    pub fn commit(&self, ticket: Ticket, outcome: Result<ResultSet, AggregateError>) -> bool {
        let mut state = self.lock_state();

        let latest = self.latest.load(Ordering::SeqCst);
        if ticket != latest {
            debug!("Discarding stale run {} (latest is {})", ticket, latest);
            return false;
        }

        state.apply_outcome(outcome);
        true
    }

    /// Submit what the user typed. An empty (or blank) input loads the
    /// default titles.
    ///
    /// # Returns
    /// Whether this run's outcome was committed.
    pub async fn submit(&self, input: &str) -> bool {
        let start_time = Instant::now();
        let ticket = self.begin(input);
        let query = Query::parse(input);

        let outcome = self.aggregator.aggregate(&query).await;
        let committed = self.commit(ticket, outcome);

        info!(
            "Run {} for {} finished in {:.2?} (committed: {})",
            ticket,
            query,
            start_time.elapsed(),
            committed
        );
        committed
    }

    /// Initial load: the default titles.
    pub async fn load_defaults(&self) -> bool {
        self.submit("").await
    }

    /// Copy of the current view state for rendering.
    pub fn snapshot(&self) -> ViewState {
        self.lock_state().clone()
    }

    pub fn set_location(&self, location: Option<Location>) {
        self.lock_state().location = location;
    }

    /// Open the details of a result by IMDb id.
    pub fn select(&self, id: &str) -> Option<MovieRecord> {
        self.lock_state().select(id).cloned()
    }

    /// Open the details of a result by its position in the grid.
    pub fn select_index(&self, index: usize) -> Option<MovieRecord> {
        self.lock_state().select_index(index).cloned()
    }

    pub fn close_details(&self) {
        self.lock_state().close_details();
    }

    /// Ticket of the newest run, 0 before the first one.
    pub fn latest_ticket(&self) -> Ticket {
        self.latest.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NO_RESULTS_MESSAGE;
    use async_trait::async_trait;
    use catalog::SearchHit;
    use pipeline::MovieGateway;

    /// Every search returns one hit whose id is the search text itself
    struct EchoGateway;

    #[async_trait]
    impl MovieGateway for EchoGateway {
        async fn search_by_title(&self, text: &str) -> Vec<SearchHit> {
            if text == "nothing" {
                return Vec::new();
            }
            vec![SearchHit::new(text, text)]
        }

        async fn fetch_by_id(&self, id: &str) -> Option<MovieRecord> {
            Some(MovieRecord::new(id, id))
        }
    }

    fn orchestrator() -> SearchOrchestrator {
        SearchOrchestrator::new(Aggregator::new(Arc::new(EchoGateway)).with_seed(1))
    }

    #[test]
    fn test_tickets_increase() {
        let orchestrator = orchestrator();
        assert_eq!(orchestrator.latest_ticket(), 0);

        assert_eq!(orchestrator.begin("a"), 1);
        assert_eq!(orchestrator.begin("b"), 2);
        assert_eq!(orchestrator.latest_ticket(), 2);
        assert_eq!(orchestrator.snapshot().query, "b");
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let orchestrator = orchestrator();
        let old = orchestrator.begin("old");
        let new = orchestrator.begin("new");

        let new_results = ResultSet::new(vec![MovieRecord::new("tt2", "New")]);
        assert!(orchestrator.commit(new, Ok(new_results.clone())));

        let old_results = ResultSet::new(vec![MovieRecord::new("tt1", "Old")]);
        assert!(!orchestrator.commit(old, Ok(old_results)));

        assert_eq!(orchestrator.snapshot().results, new_results);
    }

    #[tokio::test]
    async fn test_submit_updates_state() {
        let orchestrator = orchestrator();

        assert!(orchestrator.submit("Theri").await);

        let state = orchestrator.snapshot();
        assert_eq!(state.query, "Theri");
        assert_eq!(state.results.len(), 1);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_without_hits_sets_error() {
        let orchestrator = orchestrator();
        orchestrator.submit("Theri").await;
        orchestrator.select_index(0);

        orchestrator.submit("nothing").await;

        let state = orchestrator.snapshot();
        assert!(state.results.is_empty());
        assert_eq!(state.error.as_deref(), Some(NO_RESULTS_MESSAGE));
        assert!(state.selected.is_none());
    }

    #[tokio::test]
    async fn test_load_defaults_fills_grid() {
        let orchestrator = orchestrator();

        assert!(orchestrator.load_defaults().await);

        let state = orchestrator.snapshot();
        assert_eq!(state.results.len(), catalog::DEFAULT_TITLES.len());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_selection_and_location() {
        let orchestrator = orchestrator();
        orchestrator.submit("Iraivi").await;
        orchestrator.set_location(Some(Location::Chennai));

        let selected = orchestrator.select("Iraivi").expect("result should exist");
        assert_eq!(selected.title, "Iraivi");

        let state = orchestrator.snapshot();
        assert_eq!(state.location, Some(Location::Chennai));
        assert_eq!(state.selected.map(|r| r.id), Some("Iraivi".to_string()));

        orchestrator.close_details();
        assert!(orchestrator.snapshot().selected.is_none());
    }
}
