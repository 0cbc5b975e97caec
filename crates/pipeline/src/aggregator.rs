//! The Aggregator turns a query into a shuffled ResultSet.
//!
//! ## Algorithm
//! 1. Searching: one search per default title, or one search for the query
//! 2. EnrichingDetails: fetch full details for the selected hits, one at a time
//! 3. ShufflingAndDone: Fisher–Yates over the accumulated records
//!
//! Individual lookups never fail the run; the gateway reports them as
//! missing data and they are simply left out.

use std::fmt;
use std::sync::{Arc, Mutex};

use catalog::{DEFAULT_TITLES, MAX_RESULTS_PER_QUERY, MovieRecord, Query, ResultSet, SearchHit};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::shuffle::shuffle;
use crate::traits::MovieGateway;

/// Errors surfaced by an aggregation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// A user-entered query matched nothing at all
    #[error("No movies found for '{query}'")]
    NoResultsForQuery { query: String },
}

/// Where a run currently is; only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationStage {
    Searching,
    EnrichingDetails { done: usize, total: usize },
    ShufflingAndDone,
}

impl fmt::Display for AggregationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationStage::Searching => write!(f, "searching"),
            AggregationStage::EnrichingDetails { done, total } => {
                write!(f, "enriching details ({}/{})", done, total)
            }
            AggregationStage::ShufflingAndDone => write!(f, "shuffling"),
        }
    }
}

/// Runs the search → enrich → shuffle pipeline against a gateway.
///
/// ## Usage
/// ```ignore
/// let aggregator = Aggregator::new(gateway)
///     .with_max_results(5)
///     .with_seed(42);
///
/// let results = aggregator.aggregate(&Query::parse("Theri")).await?;
/// ```
pub struct Aggregator {
    gateway: Arc<dyn MovieGateway>,
    default_titles: Vec<String>,
    max_results: usize,
    rng: Mutex<StdRng>,
}

impl Aggregator {
    /// Create an aggregator with the standard default titles, a cap of
    /// five results per query and an OS-seeded random source.
    pub fn new(gateway: Arc<dyn MovieGateway>) -> Self {
        Self {
            gateway,
            default_titles: DEFAULT_TITLES.iter().map(|t| t.to_string()).collect(),
            max_results: MAX_RESULTS_PER_QUERY,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Replace the titles loaded for an empty query (builder pattern).
    pub fn with_default_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Cap how many hits of a user query get enriched.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Make the shuffle reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn default_titles(&self) -> &[String] {
        &self.default_titles
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run the pipeline for one query.
    ///
    /// # Returns
    /// * `Ok(ResultSet)` - shuffled detail records (possibly empty)
    /// * `Err(AggregateError::NoResultsForQuery)` - a user query had zero
    ///   search hits. The default-title path never returns this, even when
    ///   every title comes back empty.
    #[instrument(skip_all, fields(query = %query))]
    pub async fn aggregate(&self, query: &Query) -> Result<ResultSet, AggregateError> {
        debug!("Stage: {}", AggregationStage::Searching);

        let records = match query {
            Query::Defaults => self.collect_defaults().await,
            Query::Title(text) => {
                let hits = self.gateway.search_by_title(text).await;
                if hits.is_empty() {
                    info!("No search hits for '{}'", text);
                    return Err(AggregateError::NoResultsForQuery {
                        query: text.clone(),
                    });
                }
                let selected: Vec<SearchHit> = hits.into_iter().take(self.max_results).collect();
                self.enrich(&selected).await
            }
        };

        debug!("Stage: {}", AggregationStage::ShufflingAndDone);
        let records = self.shuffle_records(records);

        info!("Aggregated {} records", records.len());
        Ok(ResultSet::new(records))
    }

    /// Default path: first hit of each default title, in list order.
    async fn collect_defaults(&self) -> Vec<MovieRecord> {
        let total = self.default_titles.len();
        let mut records = Vec::with_capacity(total);

        for (done, title) in self.default_titles.iter().enumerate() {
            let hits = self.gateway.search_by_title(title).await;
            let Some(first) = hits.into_iter().next() else {
                debug!("Default title '{}' had no hits", title);
                continue;
            };

            debug!("Stage: {}", AggregationStage::EnrichingDetails { done, total });
            match self.gateway.fetch_by_id(&first.id).await {
                Some(record) => records.push(record),
                None => debug!("Dropping '{}' ({}): details unavailable", first.title, first.id),
            }
        }

        records
    }

    /// Fetch details for each hit in order, keeping only the successes.
    async fn enrich(&self, hits: &[SearchHit]) -> Vec<MovieRecord> {
        let total = hits.len();
        let mut records = Vec::with_capacity(total);

        for (done, hit) in hits.iter().enumerate() {
            debug!("Stage: {}", AggregationStage::EnrichingDetails { done, total });
            match self.gateway.fetch_by_id(&hit.id).await {
                Some(record) => records.push(record),
                None => debug!("Dropping '{}' ({}): details unavailable", hit.title, hit.id),
            }
        }

        records
    }

    fn shuffle_records(&self, mut records: Vec<MovieRecord>) -> Vec<MovieRecord> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        shuffle(&mut records, &mut *rng);
        records
    }
}
