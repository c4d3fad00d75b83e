//! Data models for configuration and benchmark results

pub mod config;
pub mod result;

pub use config::Config;
pub use result::RunResult;
