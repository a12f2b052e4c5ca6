//! Progress logging utilities.

use log::info;

use crate::error_handling::{LineOutcome, ProcessingStats};

/// Logs progress information about line processing.
///
/// Called at a fixed line cadence by the pipeline; purely observational.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `stats` - Counters accumulated so far
pub fn log_progress(start_time: std::time::Instant, stats: &ProcessingStats) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let processed = stats.lines_read();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} lines ({} unique domains) in {:.2} seconds (~{:.2} lines/sec)",
        processed,
        stats.count(LineOutcome::Emitted),
        elapsed_secs,
        rate
    );
}
