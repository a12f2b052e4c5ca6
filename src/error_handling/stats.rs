//! Processing statistics tracking.
//!
//! This module provides thread-safe statistics tracking for line outcomes
//! during a dedup run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LineOutcome;

/// Thread-safe processing statistics tracker.
///
/// Tracks the total number of lines read and a counter per [`LineOutcome`]
/// using atomics, so the tracker stays correct if validation is ever sharded
/// across workers. All counters are initialized to zero on creation.
pub struct ProcessingStats {
    lines_read: AtomicUsize,
    outcomes: HashMap<LineOutcome, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a new tracker with all counters at zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in LineOutcome::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }

        ProcessingStats {
            lines_read: AtomicUsize::new(0),
            outcomes,
        }
    }

    /// Increments the total-lines counter and returns the new total.
    pub fn increment_lines_read(&self) -> usize {
        self.lines_read.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Records the outcome of one processed line.
    ///
    /// All outcomes are initialized in the constructor, so the lookup cannot
    /// miss for a properly constructed tracker. A miss is logged rather than
    /// panicking.
    pub fn record(&self, outcome: LineOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                outcome
            );
        }
    }

    /// Returns the total number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read.load(Ordering::SeqCst)
    }

    /// Returns the count recorded for an outcome.
    pub fn count(&self, outcome: LineOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
