//! Structured logging for the message throughput tester
//!
//! Provides leveled, structured log output with per-run correlation IDs and
//! an optional JSON format for log aggregators.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general application information
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - error events but application can continue
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable console format
    Console,
    /// JSON format for structured logging
    Json,
}

/// Log entry structure for structured logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp when log entry was created
    pub timestamp: DateTime<Utc>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Logger name/component
    pub logger: String,
    /// Correlation ID for tracking related events
    pub correlation_id: Option<String>,
    /// Additional structured fields
    pub fields: HashMap<String, serde_json::Value>,
}

/// Logger implementation with console and JSON output formats
#[derive(Debug, Clone)]
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Output format
    format: LogFormat,
    /// Logger name
    name: String,
    /// Correlation ID attached to every entry from this logger
    correlation_id: Option<String>,
}

impl Logger {
    /// Create a new logger with the given component name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            min_level: LogLevel::Info,
            use_color: true,
            format: LogFormat::Console,
            name: name.into(),
            correlation_id: None,
        }
    }

    /// Set the minimum level to emit
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Enable or disable colored output
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Attach a fresh correlation ID for a new run
    pub fn with_new_correlation_id(mut self) -> Self {
        self.correlation_id = Some(Uuid::new_v4().to_string());
        self
    }

    /// Get the correlation ID, if one is attached
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Check whether entries at `level` would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Emit a log entry with structured fields
    pub fn log_with_fields(
        &self,
        level: LogLevel,
        message: &str,
        fields: HashMap<String, serde_json::Value>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            logger: self.name.clone(),
            correlation_id: self.correlation_id.clone(),
            fields,
        };

        eprintln!("{}", self.format_entry(&entry));
    }

    /// Emit a plain log entry
    pub fn log(&self, level: LogLevel, message: &str) {
        self.log_with_fields(level, message, HashMap::new());
    }

    /// Emit a debug entry
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Emit an info entry
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Emit a warning entry
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Emit an error entry
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Render an entry to its output representation
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => {
                serde_json::to_string(entry).unwrap_or_else(|_| entry.message.clone())
            }
            LogFormat::Console => {
                let level = if self.use_color {
                    format!(
                        "{}{}{}",
                        entry.level.color_code(),
                        entry.level.as_str(),
                        LogLevel::reset_code()
                    )
                } else {
                    entry.level.as_str().to_string()
                };

                let mut line = format!(
                    "{} [{}] {} - {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                    level,
                    entry.logger,
                    entry.message
                );

                if let Some(id) = &entry.correlation_id {
                    line.push_str(&format!(" (run={})", id));
                }

                if !entry.fields.is_empty() {
                    let mut keys: Vec<_> = entry.fields.keys().collect();
                    keys.sort();
                    for key in keys {
                        line.push_str(&format!(" {}={}", key, entry.fields[key]));
                    }
                }

                line
            }
        }
    }
}

/// Convenience macro-free field map builder used at call sites
pub fn fields<const N: usize>(pairs: [(&str, serde_json::Value); N]) -> HashMap<String, serde_json::Value> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
