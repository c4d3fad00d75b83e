//! Benchmark run controller
//!
//! A publisher drives a peer's send capability through a timed loop in the
//! configured benchmark mode and publishes the aggregate outcome to its
//! result slot exactly once. The run executes on whichever worker task calls
//! [`Publisher::start`]; readers poll [`Publisher::try_results`] from other
//! tasks or threads.

use crate::error::{AppError, Result};
use crate::logging::{fields, LogLevel, Logger};
use crate::models::{Config, RunResult};
use crate::payload;
use crate::peer::Peer;
use crate::results::ResultSlot;
use crate::stats;
use crate::types::BenchmarkMode;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

/// Benchmark publisher driving one peer through a timed send loop
pub struct Publisher {
    id: u32,
    config: Config,
    peer: Arc<dyn Peer>,
    results: ResultSlot,
    logger: Logger,
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Publisher {
    /// Create a publisher for one benchmark run
    ///
    /// The configuration is validated here, before any run starts; an
    /// invalid configuration never reaches the send loop.
    pub fn new(id: u32, config: Config, peer: Arc<dyn Peer>) -> Result<Self> {
        config.validate()?;

        let logger = Logger::new(format!("publisher-{}", id))
            .with_color(config.enable_color)
            .with_min_level(if config.debug {
                LogLevel::Debug
            } else if config.verbose {
                LogLevel::Info
            } else {
                LogLevel::Warn
            })
            .with_new_correlation_id();

        Ok(Self {
            id,
            config,
            peer,
            results: ResultSlot::new(),
            logger,
        })
    }

    /// Get the publisher's identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the run configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the result slot for external polling
    pub fn results(&self) -> &ResultSlot {
        &self.results
    }

    /// Non-blocking read of the run's result
    ///
    /// Fails with a not-ready error until the run completes; afterwards every
    /// call returns the same immutable result.
    pub fn try_results(&self) -> Result<RunResult> {
        self.results.try_get()
    }

    /// Execute the configured benchmark run to completion or first failure
    ///
    /// Runs synchronously on the calling task: each send is awaited before
    /// the next begins. Publishes exactly one result. Intended to be called
    /// at most once per publisher; a second call's outcome is discarded by
    /// the result slot.
    pub async fn start(&self) {
        self.logger.log_with_fields(
            LogLevel::Debug,
            "Benchmark run starting",
            fields([
                ("mode", json!(self.config.mode.name())),
                ("messages", json!(self.config.num_messages)),
            ]),
        );

        match self.config.mode {
            BenchmarkMode::Throughput => self.run_throughput().await,
            BenchmarkMode::Latency => self.run_latency().await,
        }
    }

    /// Raw send-rate measurement with an opaque filler payload
    ///
    /// One buffer of the configured size is allocated up front and reused
    /// across all sends; its content never changes.
    async fn run_throughput(&self) {
        let message = payload::filler_payload(self.config.message_size);

        let started = Instant::now();
        for _ in 0..self.config.num_messages {
            if let Err(e) = self.peer.send(&message).await {
                self.abort_run(e);
                return;
            }
        }
        self.finish_run(started.elapsed());
    }

    /// Timestamp-stamped payloads for downstream latency computation
    ///
    /// The buffer is rewritten with the current wall-clock time immediately
    /// before each send; only aggregate send-side throughput is measured
    /// here, latency itself is the consumer's job.
    async fn run_latency(&self) {
        let mut message = payload::timestamp_payload();

        let started = Instant::now();
        for _ in 0..self.config.num_messages {
            payload::stamp_timestamp(&mut message);
            if let Err(e) = self.peer.send(&message).await {
                self.abort_run(e);
                return;
            }
        }
        self.finish_run(started.elapsed());
    }

    /// Record a completed run's timing and publish the success result
    fn finish_run(&self, elapsed: std::time::Duration) {
        let duration_ms = stats::duration_ms(elapsed);
        let throughput = stats::messages_per_second(self.config.num_messages, duration_ms);

        self.results.publish(RunResult::success(duration_ms, throughput));
        self.logger.log_with_fields(
            LogLevel::Info,
            "Publisher completed",
            fields([
                ("duration_ms", json!(duration_ms)),
                ("throughput", json!(throughput)),
            ]),
        );
    }

    /// Stop the run on the first send failure and publish the failure result
    ///
    /// The transport error never propagates past this boundary; its textual
    /// description is carried in the result instead.
    fn abort_run(&self, error: AppError) {
        let description = error.to_string();
        self.results.publish(RunResult::failure(description.clone()));
        self.logger.log_with_fields(
            LogLevel::Error,
            "Benchmark run aborted on send failure",
            fields([("error", json!(description))]),
        );
    }
}
