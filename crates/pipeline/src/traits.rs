//! Core traits for the aggregation pipeline.
//!
//! This module defines the MovieGateway trait, the seam between the
//! pipeline and whatever actually talks to the movie database.

use async_trait::async_trait;
use catalog::{MovieRecord, SearchHit};

/// Lookup service the pipeline pulls movies from.
///
/// ## Contract
/// Neither method can fail. Implementations swallow transport errors,
/// non-success API responses and decode errors, and report them as
/// "no data": an empty hit list, or `None`.
///
/// ## Design Note
/// - `Send + Sync` so one gateway can be shared behind an `Arc`
/// - The pipeline awaits each call before issuing the next one
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// Search titles by free text.
    ///
    /// # Returns
    /// Hits in relevance order as reported by the database; empty on any
    /// failure or when nothing matches.
    async fn search_by_title(&self, text: &str) -> Vec<SearchHit>;

    /// Fetch the full detail record for one IMDb id.
    ///
    /// # Returns
    /// * `Some(record)` - the lookup succeeded
    /// * `None` - anything went wrong
    async fn fetch_by_id(&self, id: &str) -> Option<MovieRecord>;
}
