//! Message Throughput Tester
//!
//! A publisher-side benchmarking harness for message brokers. A publisher
//! drives a peer's send capability through a timed loop in one of two modes:
//! raw throughput with opaque filler payloads, or latency-carrying payloads
//! stamped with a send timestamp for downstream latency computation. Results
//! are exposed through a non-blocking, poll-only accessor once a run
//! completes.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod payload;
pub mod peer;
pub mod publisher;
pub mod results;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, RunResult};
pub use peer::{DiscardPeer, Peer};
pub use publisher::Publisher;
pub use results::ResultSlot;
pub use stats::RunSummary;
pub use types::BenchmarkMode;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    use crate::types::BenchmarkMode;
    use std::time::Duration;

    pub const DEFAULT_MODE: BenchmarkMode = BenchmarkMode::Throughput;
    pub const DEFAULT_NUM_MESSAGES: u32 = 100_000;
    pub const DEFAULT_MESSAGE_SIZE: usize = 1_000;
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;
    pub const MAX_NUM_MESSAGES: u32 = 100_000_000;

    /// Interval at which the CLI polls the result slot
    pub const RESULT_POLL_INTERVAL: Duration = Duration::from_millis(10);
}
