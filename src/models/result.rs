//! Benchmark run result data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable outcome record of one benchmark run
///
/// Produced exactly once per run by the publisher, then owned by its result
/// slot for the rest of the publisher's lifetime. A result is either a
/// success (duration and throughput populated, no error) or a failure (error
/// text populated, duration and throughput zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Elapsed wall-clock duration of the send loop in milliseconds
    pub duration_ms: f64,

    /// Aggregate send rate in messages per second
    pub throughput: f64,

    /// Description of the send failure that aborted the run, if any
    pub error: Option<String>,

    /// Timestamp when the result was produced
    pub completed_at: DateTime<Utc>,
}

impl RunResult {
    /// Create a successful run result
    pub fn success(duration_ms: f64, throughput: f64) -> Self {
        Self {
            duration_ms,
            throughput,
            error: None,
            completed_at: Utc::now(),
        }
    }

    /// Create a failed run result carrying the send error's description
    pub fn failure<S: Into<String>>(error: S) -> Self {
        Self {
            duration_ms: 0.0,
            throughput: 0.0,
            error: Some(error.into()),
            completed_at: Utc::now(),
        }
    }

    /// Check if this run completed without a send failure
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Get the failure description, if the run aborted
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
