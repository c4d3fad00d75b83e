//! Command-line interface module

use clap::Parser;

/// Message Throughput Tester - publisher-side broker benchmarking
#[derive(Parser, Debug, Clone)]
#[command(name = "message-throughput-tester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Benchmark mode to run (throughput or latency)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Number of messages to send
    #[arg(short = 'n', long = "messages")]
    pub messages: Option<u32>,

    /// Message payload size in bytes (throughput mode only)
    #[arg(short = 's', long = "size")]
    pub size: Option<usize>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None // Fall back to configuration / default detection
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let cli = Cli::parse_from(["mtt"]);
        assert!(cli.mode.is_none());
        assert!(cli.messages.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_full_arguments_parse() {
        let cli = Cli::parse_from([
            "mtt", "--mode", "latency", "--messages", "5000", "--size", "256", "--verbose",
        ]);
        assert_eq!(cli.mode.as_deref(), Some("latency"));
        assert_eq!(cli.messages, Some(5000));
        assert_eq!(cli.size, Some(256));
        assert!(cli.verbose);
    }

    #[test]
    fn test_conflicting_color_flags_rejected() {
        let cli = Cli::parse_from(["mtt", "--color", "--no-color"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_color_preference() {
        assert_eq!(Cli::parse_from(["mtt", "--color"]).use_colors(), Some(true));
        assert_eq!(
            Cli::parse_from(["mtt", "--no-color"]).use_colors(),
            Some(false)
        );
        assert_eq!(Cli::parse_from(["mtt"]).use_colors(), None);
    }
}
