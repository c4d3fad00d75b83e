//! Type definitions and aliases

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Benchmark mode selecting which send-loop algorithm a run executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkMode {
    /// Measure raw message-send rate with opaque filler payloads
    Throughput,
    /// Stamp each payload with a send timestamp for downstream latency computation
    Latency,
}

impl BenchmarkMode {
    /// Get a human-readable name for this benchmark mode
    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkMode::Throughput => "throughput",
            BenchmarkMode::Latency => "latency",
        }
    }

    /// All modes supported by the application
    pub fn all() -> &'static [BenchmarkMode] {
        &[BenchmarkMode::Throughput, BenchmarkMode::Latency]
    }
}

impl fmt::Display for BenchmarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchmarkMode {
    type Err = AppError;

    /// Unknown mode strings are a configuration error, rejected before any
    /// run starts.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "throughput" => Ok(BenchmarkMode::Throughput),
            "latency" => Ok(BenchmarkMode::Latency),
            other => Err(AppError::config(format!(
                "Invalid benchmark mode '{}' (expected 'throughput' or 'latency')",
                other
            ))),
        }
    }
}
