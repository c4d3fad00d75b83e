//! Timing statistics for benchmark runs

use crate::models::{Config, RunResult};
use crate::types::BenchmarkMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Convert an elapsed duration to fractional milliseconds
#[inline]
pub fn duration_ms(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

/// Aggregate send rate in messages per second
///
/// The duration is in milliseconds, hence the factor of 1000. A zero-message
/// run or one faster than clock resolution divides by (near) zero and yields
/// a NaN-like rate; that degenerate case is preserved rather than clamped.
#[inline]
pub fn messages_per_second(num_messages: u32, duration_ms: f64) -> f64 {
    1000.0 * num_messages as f64 / duration_ms
}

/// Aggregate payload volume in megabytes per second
#[inline]
pub fn megabytes_per_second(num_messages: u32, message_size: usize, duration_ms: f64) -> f64 {
    let total_bytes = num_messages as u64 * message_size as u64;
    total_bytes as f64 / 1e6 / (duration_ms / 1000.0)
}

/// Run configuration and outcome assembled for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Benchmark mode that was executed
    pub mode: BenchmarkMode,
    /// Number of messages the run was configured to send
    pub num_messages: u32,
    /// Payload size in bytes (throughput mode)
    pub message_size: usize,
    /// Outcome of the run
    pub result: RunResult,
}

impl RunSummary {
    /// Assemble a summary from the run configuration and its result
    pub fn new(config: &Config, result: RunResult) -> Self {
        Self {
            mode: config.mode,
            num_messages: config.num_messages,
            message_size: config.message_size,
            result,
        }
    }

    /// Payload bytes per message actually put on the wire
    pub fn payload_size(&self) -> usize {
        match self.mode {
            BenchmarkMode::Throughput => self.message_size,
            BenchmarkMode::Latency => crate::payload::TIMESTAMP_PAYLOAD_LEN,
        }
    }

    /// Data rate in MB/s, when the run succeeded and produced a finite rate
    pub fn data_rate_mbps(&self) -> Option<f64> {
        if !self.result.is_success() {
            return None;
        }
        let rate = megabytes_per_second(
            self.num_messages,
            self.payload_size(),
            self.result.duration_ms,
        );
        rate.is_finite().then_some(rate)
    }
}
