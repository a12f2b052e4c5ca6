//! Error and outcome type definitions.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Classification of a single processed input line.
///
/// Every line lands in exactly one of these buckets. Only `Emitted` lines
/// produce output; the other two are silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LineOutcome {
    /// Valid hostname whose canonical name was seen for the first time and written out
    Emitted,
    /// Valid hostname whose canonical name had already been emitted
    Duplicate,
    /// Hostname that failed parsing or validation
    Invalid,
}

impl LineOutcome {
    /// Returns a human-readable string representation of the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineOutcome::Emitted => "unique domains emitted",
            LineOutcome::Duplicate => "duplicates skipped",
            LineOutcome::Invalid => "invalid hostnames",
        }
    }
}

impl std::fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_line_outcome_as_str() {
        assert_eq!(LineOutcome::Emitted.as_str(), "unique domains emitted");
        assert_eq!(LineOutcome::Duplicate.as_str(), "duplicates skipped");
        assert_eq!(LineOutcome::Invalid.as_str(), "invalid hostnames");
    }

    #[test]
    fn test_all_outcomes_have_string_representation() {
        for outcome in LineOutcome::iter() {
            assert!(
                !outcome.as_str().is_empty(),
                "{:?} should have non-empty string",
                outcome
            );
        }
    }

    #[test]
    fn test_line_outcome_equality() {
        assert_eq!(LineOutcome::Emitted, LineOutcome::Emitted);
        assert_ne!(LineOutcome::Emitted, LineOutcome::Duplicate);
    }
}
