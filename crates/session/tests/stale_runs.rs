//! Overlapping searches: only the newest submission may update the state.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use catalog::{MovieRecord, SearchHit};
use pipeline::{Aggregator, MovieGateway};
use session::SearchOrchestrator;
use tokio::sync::Notify;

/// Gateway that parks any search for "slow" until released
#[derive(Default)]
struct GatedGateway {
    slow_started: Notify,
    release_slow: Notify,
}

#[async_trait]
impl MovieGateway for GatedGateway {
    async fn search_by_title(&self, text: &str) -> Vec<SearchHit> {
        if text == "slow" {
            self.slow_started.notify_one();
            self.release_slow.notified().await;
        }
        vec![SearchHit::new(format!("id-{}", text), text)]
    }

    async fn fetch_by_id(&self, id: &str) -> Option<MovieRecord> {
        let title = id.trim_start_matches("id-");
        Some(MovieRecord::new(id, title))
    }
}

#[tokio::test]
async fn test_slow_stale_run_does_not_overwrite_newer_results() {
    let gateway = Arc::new(GatedGateway::default());
    let orchestrator = SearchOrchestrator::new(Aggregator::new(gateway.clone()));

    // First search starts and stalls inside the gateway
    let slow = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.submit("slow").await }
    });
    gateway.slow_started.notified().await;

    // A newer search completes while the first is still in flight
    assert!(orchestrator.submit("fast").await);

    // Let the stale run finish; it must be discarded
    gateway.release_slow.notify_one();
    let slow_committed = tokio::time::timeout(Duration::from_secs(5), slow)
        .await
        .expect("stale run should finish")
        .expect("stale run panicked");
    assert!(!slow_committed);

    let state = orchestrator.snapshot();
    assert_eq!(state.query, "fast");
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results.records()[0].title, "fast");
}

#[tokio::test]
async fn test_sequential_runs_all_commit() {
    let gateway = Arc::new(GatedGateway::default());
    let orchestrator = SearchOrchestrator::new(Aggregator::new(gateway));

    assert!(orchestrator.submit("Theri").await);
    assert!(orchestrator.submit("Dada").await);
    assert_eq!(orchestrator.latest_ticket(), 2);

    let state = orchestrator.snapshot();
    assert_eq!(state.results.records()[0].title, "Dada");
}
