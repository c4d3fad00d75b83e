//! Configuration data model and validation

use crate::types::{AppError, BenchmarkMode, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
///
/// Immutable for the lifetime of a run: the publisher takes a copy at
/// construction and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Benchmark mode to execute
    #[serde(default = "default_mode")]
    pub mode: BenchmarkMode,

    /// Number of messages to send during the run
    #[serde(default = "default_num_messages")]
    pub num_messages: u32,

    /// Message payload size in bytes (throughput mode only)
    #[serde(default = "default_message_size")]
    pub message_size: usize,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            num_messages: default_num_messages(),
            message_size: default_message_size(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    ///
    /// A zero message count stays legal: such a run completes immediately and
    /// its throughput value is a documented degenerate case.
    pub fn validate(&self) -> Result<()> {
        if self.message_size == 0 {
            return Err(AppError::config("Message size must be greater than 0"));
        }

        if self.message_size > crate::defaults::MAX_MESSAGE_SIZE {
            return Err(AppError::config(format!(
                "Message size cannot exceed {} bytes",
                crate::defaults::MAX_MESSAGE_SIZE
            )));
        }

        if self.num_messages > crate::defaults::MAX_NUM_MESSAGES {
            return Err(AppError::config(format!(
                "Message count cannot exceed {}",
                crate::defaults::MAX_NUM_MESSAGES
            )));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(mode) = std::env::var("BENCH_MODE") {
            self.mode = mode.parse()?;
        }

        if let Ok(num_messages) = std::env::var("NUM_MESSAGES") {
            self.num_messages = num_messages.parse().map_err(|e| {
                AppError::config(format!("Invalid NUM_MESSAGES value '{}': {}", num_messages, e))
            })?;
        }

        if let Ok(message_size) = std::env::var("MESSAGE_SIZE") {
            self.message_size = message_size.parse().map_err(|e| {
                AppError::config(format!("Invalid MESSAGE_SIZE value '{}': {}", message_size, e))
            })?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.parse().map_err(|e| {
                AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e))
            })?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_mode() -> BenchmarkMode {
    crate::defaults::DEFAULT_MODE
}

fn default_num_messages() -> u32 {
    crate::defaults::DEFAULT_NUM_MESSAGES
}

fn default_message_size() -> usize {
    crate::defaults::DEFAULT_MESSAGE_SIZE
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_message_size_invalid() {
        let mut config = Config::default();
        config.message_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_message_invalid() {
        let mut config = Config::default();
        config.message_size = crate::defaults::MAX_MESSAGE_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_message_count_allowed() {
        let mut config = Config::default();
        config.num_messages = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_excessive_message_count_invalid() {
        let mut config = Config::default();
        config.num_messages = crate::defaults::MAX_NUM_MESSAGES + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.mode, crate::defaults::DEFAULT_MODE);
        assert_eq!(config.num_messages, crate::defaults::DEFAULT_NUM_MESSAGES);
        assert_eq!(config.message_size, crate::defaults::DEFAULT_MESSAGE_SIZE);
    }
}
