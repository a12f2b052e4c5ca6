//! The dedup pipeline.
//!
//! Consumes a finite, non-restartable sequence of raw lines, validates each
//! one, and writes every newly-seen valid canonical name to the output sink
//! exactly once, in first-occurrence order. The seen-set is owned by the
//! single consuming loop and grows monotonically for the lifetime of a run.

use std::collections::HashSet;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::log_progress;
use crate::config::PROGRESS_LOG_INTERVAL;
use crate::domain::DomainValidator;
use crate::error_handling::{LineOutcome, ProcessingStats};

/// Streams lines from `reader` through the validator into `writer`.
///
/// Each line is handled independently; the only cross-line state is the
/// seen-set of canonical names. Invalid hostnames are counted and skipped,
/// never treated as errors. Lines are read as raw bytes and decoded lossily,
/// so invalid UTF-8 classifies a line like any other hostname instead of
/// aborting the run. A read or write failure aborts the run (lines already
/// written stay written; there is no retry).
///
/// Progress is logged every [`PROGRESS_LOG_INTERVAL`] lines.
///
/// # Errors
///
/// Returns an error on the first failed read from `reader` or write to
/// `writer`.
pub async fn process_lines<R, W>(
    mut reader: R,
    writer: &mut W,
    validator: &DomainValidator,
    stats: &ProcessingStats,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let start_time = Instant::now();
    let mut seen: HashSet<String> = HashSet::new();
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read line from input")?;
        if bytes_read == 0 {
            break;
        }

        let total = stats.increment_lines_read();

        // Lossy so a stray non-UTF-8 byte stays a per-line classification
        let line = String::from_utf8_lossy(&buf);
        let result = validator.validate(&line);

        if !result.valid {
            stats.record(LineOutcome::Invalid);
        } else if seen.contains(&result.name) {
            stats.record(LineOutcome::Duplicate);
        } else {
            writer
                .write_all(result.name.as_bytes())
                .await
                .context("Failed to write to output sink")?;
            writer
                .write_all(b"\n")
                .await
                .context("Failed to write to output sink")?;
            seen.insert(result.name);
            stats.record(LineOutcome::Emitted);
        }

        if total % PROGRESS_LOG_INTERVAL == 0 {
            log_progress(start_time, stats);
        }
    }

    Ok(())
}
