//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_dedup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_dedup::initialization::init_logger_with;
use domain_dedup::{run_dedup, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the dedup pipeline using the library
    match run_dedup(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Processed {} line{} ({} unique domains, {} duplicates, {} invalid) in {:.1}s",
                report.total_lines,
                if report.total_lines == 1 { "" } else { "s" },
                report.unique_domains,
                report.duplicates,
                report.invalid,
                report.elapsed_seconds
            );
            println!("Unique domains written to {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_dedup error: {:#}", e);
            process::exit(1);
        }
    }
}
