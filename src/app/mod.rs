//! Main application modules.
//!
//! This module provides the progress logging and statistics printing used by
//! the pipeline and the run orchestration.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_summary;
