//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (plain or JSON format)
//! - The static suffix table shared by all validations

mod logger;

use std::sync::Arc;

use crate::suffix::SuffixTable;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the suffix table.
///
/// Builds the immutable TLD and registrable-SLD sets from the compiled-in
/// catalog data.
///
/// # Returns
///
/// An `Arc<SuffixTable>` that can be shared read-only across validations.
pub fn init_suffix_table() -> Arc<SuffixTable> {
    Arc::new(SuffixTable::new())
}
