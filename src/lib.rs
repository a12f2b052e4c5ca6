//! domain_dedup library: hostname validation and deduplication
//!
//! This library streams hostnames from a line-oriented input, validates each
//! one against a static catalog of top-level domains, canonicalizes valid
//! names, and writes each newly-seen canonical name once to an output sink.
//!
//! # Example
//!
//! ```no_run
//! use domain_dedup::{run_dedup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("hostnames.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_dedup(config).await?;
//! println!("Wrote {} unique domains", report.unique_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod pipeline;
pub mod suffix;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use domain::{DomainValidator, Validation};
pub use error_handling::{LineOutcome, ProcessingStats};
pub use run::{run_dedup, DedupReport};
pub use suffix::SuffixTable;

// Internal run module (contains the main pipeline orchestration)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::{AsyncBufRead, AsyncWriteExt, BufReader, BufWriter};

    use crate::app::print_summary;
    use crate::config::Config;
    use crate::domain::DomainValidator;
    use crate::error_handling::{LineOutcome, ProcessingStats};
    use crate::initialization::init_suffix_table;
    use crate::pipeline::process_lines;

    /// Results of a completed dedup run.
    #[derive(Debug, Clone)]
    pub struct DedupReport {
        /// Total number of input lines read
        pub total_lines: usize,
        /// Number of unique canonical names written to the output sink
        pub unique_domains: usize,
        /// Number of valid hostnames skipped because their canonical name was already seen
        pub duplicates: usize,
        /// Number of lines classified as invalid
        pub invalid: usize,
        /// Path the unique names were written to
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the dedup pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads hostnames from
    /// the input file (or stdin when the path is `-`), validates each one,
    /// and writes every newly-seen canonical name to the output file in
    /// first-occurrence order.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be opened
    /// - The output file cannot be created
    /// - A read or write fails mid-stream
    ///
    /// A hostname that merely fails validation is never an error; it is
    /// counted and excluded from the output.
    pub async fn run_dedup(config: Config) -> Result<DedupReport> {
        let start_time = std::time::Instant::now();

        let is_stdin = config.file.as_os_str() == "-";

        // Open the input source before truncating the output sink, so a
        // missing input file leaves any previous output untouched.
        let reader: Box<dyn AsyncBufRead + Unpin> = if is_stdin {
            info!("Reading hostnames from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        } else {
            let file = tokio::fs::File::open(&config.file)
                .await
                .with_context(|| format!("Failed to open input file: {}", config.file.display()))?;
            Box::new(BufReader::new(file))
        };

        let output_file = tokio::fs::File::create(&config.output)
            .await
            .with_context(|| {
                format!("Failed to open output file: {}", config.output.display())
            })?;
        let mut writer = BufWriter::new(output_file);

        let table = init_suffix_table();
        let validator = DomainValidator::new(table, config.validate_special_chars);
        let stats = ProcessingStats::new();

        process_lines(reader, &mut writer, &validator, &stats).await?;

        writer
            .flush()
            .await
            .context("Failed to flush output file")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_summary(&stats, elapsed_seconds);

        Ok(DedupReport {
            total_lines: stats.lines_read(),
            unique_domains: stats.count(LineOutcome::Emitted),
            duplicates: stats.count(LineOutcome::Duplicate),
            invalid: stats.count(LineOutcome::Invalid),
            output_path: config.output,
            elapsed_seconds,
        })
    }
}
