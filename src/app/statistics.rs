//! Final statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{LineOutcome, ProcessingStats};

/// Logs the final per-outcome counts and a one-line summary of the run.
///
/// Works with both plain and JSON log formats (log::info! handles formatting).
pub fn print_summary(stats: &ProcessingStats, elapsed_seconds: f64) {
    for outcome in LineOutcome::iter() {
        info!("{}: {}", outcome, stats.count(outcome));
    }

    let total = stats.lines_read();
    info!(
        "✅ Processed {} line{} ({} unique domains) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        stats.count(LineOutcome::Emitted),
        elapsed_seconds
    );
}
