//! Configuration types for readers and ingestion.
//!
//! Plain structs with builder methods, usable without any CLI framework.
//!
//! - [`MessengerConfig`] - Messenger JSON reader settings
//! - [`IngestConfig`] - Read-phase concurrency and failure handling
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{FailurePolicy, IngestConfig};
//!
//! let config = IngestConfig::new()
//!     .with_max_workers(4)
//!     .with_failure_policy(FailurePolicy::Skip);
//!
//! assert_eq!(config.worker_count(10), 4);
//! ```

use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};

/// Configuration for Messenger export reading.
///
/// # Example
///
/// ```rust
/// use chatstats::config::MessengerConfig;
///
/// let config = MessengerConfig::new().with_fix_encoding(true);
/// assert!(config.fix_encoding);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessengerConfig {
    /// Repair Meta's Latin-1 mojibake in sender names and content
    /// (default: false, so character counts match the raw export)
    pub fix_encoding: bool,
}

impl MessengerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the encoding fix.
    #[must_use]
    pub fn with_fix_encoding(mut self, fix: bool) -> Self {
        self.fix_encoding = fix;
        self
    }
}

/// What to do when a source fails fatally during the read phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole run, reporting every failed source (default).
    #[default]
    Abort,
    /// Warn about each failed source and aggregate the rest.
    Skip,
}

/// Configuration for the concurrent read phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Upper bound on concurrent readers (default: available parallelism)
    pub max_workers: Option<usize>,

    /// Failure handling (default: abort)
    pub failure_policy: FailurePolicy,
}

impl IngestConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of concurrent readers. Zero means "default".
    #[must_use]
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = (workers > 0).then_some(workers);
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Number of reader threads to use for `sources` sources.
    ///
    /// Never more than the number of sources and never less than one.
    pub fn worker_count(&self, sources: usize) -> usize {
        let limit = self.max_workers.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });
        limit.min(sources).max(1)
    }
}
