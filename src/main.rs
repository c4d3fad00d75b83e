//! Message Throughput Tester - Main CLI Application
//!
//! Runs a single benchmark publisher against the built-in discard peer and
//! reports the aggregate result. Real broker transports are supplied by
//! embedders of the library crate.

use clap::Parser;
use message_throughput_tester::{
    cli::Cli,
    config::load_config,
    defaults,
    error::{AppError, Result},
    output::OutputFormatterFactory,
    peer::DiscardPeer,
    publisher::Publisher,
    stats::RunSummary,
    PKG_NAME, VERSION,
};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Surface panics as a single line instead of a bare trace
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    if let Err(e) = run_application(cli).await {
        eprintln!("{}", e.format_for_console(true));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    let config = load_config(cli)?;

    if config.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Configuration loaded successfully:");
        println!("  Mode: {}", config.mode);
        println!("  Messages: {}", config.num_messages);
        println!("  Message size: {} bytes", config.message_size);
        println!("  Color output: {}", config.enable_color);
        println!();
    }

    let peer = Arc::new(DiscardPeer::new());
    let publisher = Arc::new(Publisher::new(1, config.clone(), peer.clone())?);

    if config.verbose || config.debug {
        println!(
            "Starting {} benchmark: {} messages...",
            config.mode, config.num_messages
        );
    }

    // The run executes on a dedicated worker task; this task polls the
    // result slot the way an external reporting layer would.
    let runner = {
        let publisher = Arc::clone(&publisher);
        tokio::spawn(async move { publisher.start().await })
    };

    loop {
        if publisher.results().is_ready() || runner.is_finished() {
            break;
        }
        tokio::time::sleep(defaults::RESULT_POLL_INTERVAL).await;
    }

    runner
        .await
        .map_err(|e| AppError::internal(format!("benchmark worker failed: {}", e)))?;
    let result = publisher.try_results()?;

    let summary = RunSummary::new(&config, result);
    let formatter = OutputFormatterFactory::create_formatter(config.enable_color);
    println!("{}", formatter.format_summary(&summary));

    if config.verbose {
        println!();
        println!("Peer delivery count: {}", peer.sent_count());
        println!("Peer delivery bytes: {}", peer.sent_bytes());
    }

    match summary.result.error_message() {
        Some(error) => Err(AppError::transport(error.to_string())),
        None => Ok(()),
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config { .. } | AppError::Validation { .. } => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Valid modes are 'throughput' and 'latency'");
            eprintln!("  - Message size must be a positive number of bytes");
            eprintln!("  - Settings can also come from BENCH_MODE, NUM_MESSAGES, MESSAGE_SIZE");
        }
        AppError::Transport { .. } => {
            eprintln!();
            eprintln!("Transport troubleshooting:");
            eprintln!("  - The run stops at the first failed send; rerun to retry");
            eprintln!("  - Check the peer/broker connection before rerunning");
        }
        _ => {}
    }
}
