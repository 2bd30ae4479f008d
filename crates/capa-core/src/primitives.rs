//! # Policy Constants
//!
//! Fixed defaults compiled into the core. Each one can be overridden where
//! the owning component takes it as a parameter.

/// Salience assigned to a node created without an explicit value.
pub const DEFAULT_SALIENCE: f32 = 1.0;

/// Substrings that disqualify a candidate from entering working memory.
///
/// Matching is case-sensitive. `RelevanceFilter::new` accepts a replacement list.
pub const DEFAULT_IRRELEVANT_KEYWORDS: &[&str] = &["rauschen", "unwichtig", "irrelevant"];

/// Journal location used when neither the caller nor the config names one.
pub const DEFAULT_JOURNAL_PATH: &str = "journals/ltm_journal.wal";

/// Maximum snapshot size accepted by the decoder (64 MB).
///
/// Checked before parsing so a corrupted length prefix cannot drive allocation.
pub const MAX_SNAPSHOT_SIZE: usize = 64 * 1024 * 1024;
