//! Error types and processing statistics.
//!
//! Invalid hostnames are an expected outcome, not a fault: they are counted
//! under [`LineOutcome::Invalid`] and never surface as errors. Only setup
//! failures and mid-stream I/O failures are real errors, and those are
//! reported as `anyhow::Error` at the run seam.

mod stats;
mod types;

pub use stats::ProcessingStats;
pub use types::{InitializationError, LineOutcome};
