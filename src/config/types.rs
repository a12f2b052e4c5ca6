//! Configuration types and CLI options.
//!
//! This module defines the enums and struct used for command-line argument
//! parsing and programmatic configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_OUTPUT_PATH;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line in the binary; can also be constructed
/// programmatically (e.g. in tests) via `Default`.
///
/// # Examples
///
/// ```no_run
/// use domain_dedup::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("hostnames.txt"),
///     validate_special_chars: true,
///     ..Default::default()
/// };
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "domain_dedup",
    version,
    about = "Validates a stream of hostnames against the public TLD catalog and writes each unique registrable domain once."
)]
pub struct Config {
    /// File to read hostnames from, one per line (use "-" for stdin)
    pub file: PathBuf,

    /// File the unique canonical names are written to (truncated at start)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Reject hostnames containing characters outside [A-Za-z0-9._-]
    #[arg(long)]
    pub validate_special_chars: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("hostnames.txt"),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            validate_special_chars: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(!config.validate_special_chars);
    }

    #[test]
    fn test_config_debug_assert_no_panic() {
        // Debug formatting should work for diagnostics
        let config = Config::default();
        let formatted = format!("{:?}", config);
        assert!(formatted.contains("hostnames.txt"));
    }
}
