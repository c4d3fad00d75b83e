//! Console output formatting for benchmark results

use crate::stats::RunSummary;
use colored::Colorize;

/// Formatter rendering a run summary for the console
pub trait OutputFormatter: Send + Sync {
    /// Render the full run summary
    fn format_summary(&self, summary: &RunSummary) -> String;
}

/// Plain-text formatter without ANSI styling
pub struct PlainFormatter;

/// Formatter with ANSI color styling for interactive terminals
pub struct ColoredFormatter;

fn header_line(summary: &RunSummary) -> String {
    format!(
        "Benchmark: {} | messages: {} | payload: {} bytes",
        summary.mode,
        summary.num_messages,
        summary.payload_size()
    )
}

fn success_lines(summary: &RunSummary) -> (String, String, Option<String>) {
    let duration = format!("Duration:   {:.3} ms", summary.result.duration_ms);
    let throughput = format!("Throughput: {:.2} msg/s", summary.result.throughput);
    let data_rate = summary
        .data_rate_mbps()
        .map(|rate| format!("Data rate:  {:.2} MB/s", rate));
    (duration, throughput, data_rate)
}

impl OutputFormatter for PlainFormatter {
    fn format_summary(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        out.push_str(&header_line(summary));
        out.push('\n');

        match summary.result.error_message() {
            None => {
                let (duration, throughput, data_rate) = success_lines(summary);
                out.push_str("Status:     OK\n");
                out.push_str(&duration);
                out.push('\n');
                out.push_str(&throughput);
                if let Some(rate) = data_rate {
                    out.push('\n');
                    out.push_str(&rate);
                }
            }
            Some(error) => {
                out.push_str("Status:     FAILED\n");
                out.push_str(&format!("Error:      {}", error));
            }
        }

        out
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_summary(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        out.push_str(&header_line(summary).bold().to_string());
        out.push('\n');

        match summary.result.error_message() {
            None => {
                let (duration, throughput, data_rate) = success_lines(summary);
                out.push_str(&format!("Status:     {}\n", "OK".green().bold()));
                out.push_str(&duration);
                out.push('\n');
                out.push_str(&throughput.cyan().to_string());
                if let Some(rate) = data_rate {
                    out.push('\n');
                    out.push_str(&rate);
                }
            }
            Some(error) => {
                out.push_str(&format!("Status:     {}\n", "FAILED".red().bold()));
                out.push_str(&format!("Error:      {}", error.red()));
            }
        }

        out
    }
}

/// Factory for creating the appropriate formatter
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on the color setting
    pub fn create_formatter(use_color: bool) -> Box<dyn OutputFormatter> {
        if use_color {
            Box::new(ColoredFormatter)
        } else {
            Box::new(PlainFormatter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Config, RunResult};
    use crate::types::BenchmarkMode;

    fn summary(result: RunResult) -> RunSummary {
        let config = Config {
            mode: BenchmarkMode::Throughput,
            num_messages: 1000,
            message_size: 128,
            enable_color: false,
            verbose: false,
            debug: false,
        };
        RunSummary::new(&config, result)
    }

    #[test]
    fn test_plain_success_output() {
        let out = PlainFormatter.format_summary(&summary(RunResult::success(125.0, 8000.0)));

        assert!(out.contains("throughput"));
        assert!(out.contains("messages: 1000"));
        assert!(out.contains("payload: 128 bytes"));
        assert!(out.contains("Status:     OK"));
        assert!(out.contains("125.000 ms"));
        assert!(out.contains("8000.00 msg/s"));
        assert!(out.contains("MB/s"));
    }

    #[test]
    fn test_plain_failure_output() {
        let out = PlainFormatter.format_summary(&summary(RunResult::failure("broker unreachable")));

        assert!(out.contains("Status:     FAILED"));
        assert!(out.contains("broker unreachable"));
        assert!(!out.contains("msg/s"));
    }

    #[test]
    fn test_colored_output_contains_same_facts() {
        let out = ColoredFormatter.format_summary(&summary(RunResult::success(125.0, 8000.0)));

        assert!(out.contains("125.000 ms"));
        assert!(out.contains("OK"));
    }

    #[test]
    fn test_factory_selects_formatter() {
        let plain = OutputFormatterFactory::create_formatter(false);
        let colored = OutputFormatterFactory::create_formatter(true);

        let s = summary(RunResult::success(1.0, 1.0));
        // Both render without panicking and agree on the headline facts
        assert!(plain.format_summary(&s).contains("Benchmark: throughput"));
        assert!(colored.format_summary(&s).contains("throughput"));
    }
}
