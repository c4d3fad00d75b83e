//! Cross-thread integration tests for the publisher result lifecycle
//!
//! These tests exercise the library the way an embedding harness would: the
//! run executes on a dedicated worker task while other tasks poll the result
//! slot concurrently.

use async_trait::async_trait;
use message_throughput_tester::{
    BenchmarkMode, Config, DiscardPeer, Peer, Publisher, Result, RunSummary,
};
use std::sync::Arc;
use std::time::Duration;

fn config(mode: BenchmarkMode, num_messages: u32, message_size: usize) -> Config {
    Config {
        mode,
        num_messages,
        message_size,
        enable_color: false,
        verbose: false,
        debug: false,
    }
}

/// Peer that takes a measurable amount of time per send
struct SlowPeer;

#[async_trait]
impl Peer for SlowPeer {
    async fn send(&self, _payload: &[u8]) -> Result<()> {
        tokio::time::sleep(Duration::from_micros(200)).await;
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_readers_converge_on_the_single_result() {
    let publisher = Arc::new(
        Publisher::new(1, config(BenchmarkMode::Throughput, 200, 32), Arc::new(SlowPeer))
            .unwrap(),
    );

    let runner = {
        let publisher = Arc::clone(&publisher);
        tokio::spawn(async move { publisher.start().await })
    };

    // Several readers poll while the run is still in progress
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let publisher = Arc::clone(&publisher);
            tokio::spawn(async move {
                loop {
                    match publisher.try_results() {
                        Ok(result) => return result,
                        Err(e) => {
                            // The only pre-completion outcome is "not ready"
                            assert_eq!(e.category(), "NOT_READY");
                            tokio::time::sleep(Duration::from_millis(1)).await;
                        }
                    }
                }
            })
        })
        .collect();

    runner.await.unwrap();

    let mut results = Vec::new();
    for reader in readers {
        results.push(reader.await.unwrap());
    }

    // Every reader observed the same, fully-formed result
    let first = &results[0];
    assert!(first.is_success());
    assert!(first.duration_ms > 0.0);
    for result in &results {
        assert_eq!(result.duration_ms, first.duration_ms);
        assert_eq!(result.throughput, first.throughput);
        assert_eq!(result.completed_at, first.completed_at);
    }
}

#[tokio::test]
async fn results_are_not_ready_before_any_run() {
    let publisher = Publisher::new(
        1,
        config(BenchmarkMode::Latency, 10, 64),
        Arc::new(DiscardPeer::new()),
    )
    .unwrap();

    let err = publisher.try_results().unwrap_err();
    assert_eq!(err.category(), "NOT_READY");
}

#[tokio::test]
async fn embedder_flow_throughput_run_to_summary() {
    let peer = Arc::new(DiscardPeer::new());
    let publisher =
        Publisher::new(7, config(BenchmarkMode::Throughput, 1_000, 128), peer.clone()).unwrap();

    publisher.start().await;

    assert_eq!(peer.sent_count(), 1_000);
    assert_eq!(peer.sent_bytes(), 1_000 * 128);

    let result = publisher.try_results().unwrap();
    let summary = RunSummary::new(publisher.config(), result);
    assert_eq!(summary.payload_size(), 128);
    assert!(summary.data_rate_mbps().unwrap() > 0.0);
}

#[tokio::test]
async fn embedder_flow_latency_run_to_summary() {
    let peer = Arc::new(DiscardPeer::new());
    let publisher =
        Publisher::new(8, config(BenchmarkMode::Latency, 1_000, 128), peer.clone()).unwrap();

    publisher.start().await;

    // Latency payloads are the fixed 9-byte timestamp buffer, not message_size
    assert_eq!(peer.sent_count(), 1_000);
    assert_eq!(peer.sent_bytes(), 1_000 * 9);

    let summary = RunSummary::new(publisher.config(), publisher.try_results().unwrap());
    assert_eq!(summary.payload_size(), 9);
}
