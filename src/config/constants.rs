//! Configuration constants.

/// Number of processed lines between progress log messages.
///
/// Progress reporting is an operational signal only; it has no effect on
/// which names are emitted.
pub const PROGRESS_LOG_INTERVAL: usize = 100_000;

/// Default path the unique canonical names are written to.
pub const DEFAULT_OUTPUT_PATH: &str = "./unique_domains.txt";

/// Character set a hostname must match when `--validate-special-chars` is on.
///
/// Anchored over the whole (trimmed) hostname, so a single character outside
/// `[A-Za-z0-9._-]` rejects the line.
pub const HOSTNAME_CHARSET: &str = r"^[A-Za-z0-9._-]+$";
