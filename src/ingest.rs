//! Concurrent read phase.
//!
//! [`read_sources`] reads every source on a bounded `rayon` pool and returns
//! one [`SourceOutcome`] per source, in the order the caller supplied them.
//! The parallel collect only returns once every read task has finished, so
//! nothing downstream ever sees a partial result.
//!
//! ```text
//!   paths ──► [reader] [reader] [reader]   (bounded pool, any completion order)
//!                 │        │        │
//!                 └────────┴────────┘  join (barrier)
//!                          │
//!               outcomes in caller order ──► Ingestion::into_batches
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::config::{FailurePolicy, IngestConfig};
//! use chatstats::diagnostics::TracingDiagnostics;
//! use chatstats::ingest::read_sources;
//! use chatstats::readers::MessengerReader;
//!
//! let reader = MessengerReader::new();
//! let ingestion = read_sources(&reader, &["a.json", "b.json"], &IngestConfig::new(), &TracingDiagnostics)?;
//!
//! for failure in ingestion.failures() {
//!     eprintln!("{}", failure.path().display());
//! }
//! let batches = ingestion.into_batches(FailurePolicy::Skip, &TracingDiagnostics)?;
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;

use crate::MessageRecord;
use crate::config::{FailurePolicy, IngestConfig};
use crate::diagnostics::Diagnostics;
use crate::error::{ChatstatsError, Result, SourceFailure};
use crate::reader::SourceReader;

/// The result of reading a single source.
#[derive(Debug)]
pub struct SourceOutcome {
    path: PathBuf,
    result: Result<Vec<MessageRecord>>,
    warnings: Vec<String>,
}

impl SourceOutcome {
    /// The source this outcome belongs to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed messages, or the fatal error for this source.
    pub fn result(&self) -> &Result<Vec<MessageRecord>> {
        &self.result
    }

    /// Warnings the reader emitted for this source (e.g. file not found).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns `true` if the source failed fatally.
    pub fn is_failed(&self) -> bool {
        self.result.is_err()
    }

    /// Number of messages read, zero for a failed source.
    pub fn message_count(&self) -> usize {
        self.result.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Every source outcome of one read phase, in caller order.
#[derive(Debug, Default)]
pub struct Ingestion {
    outcomes: Vec<SourceOutcome>,
}

impl Ingestion {
    /// All outcomes, in the order the sources were supplied.
    pub fn outcomes(&self) -> &[SourceOutcome] {
        &self.outcomes
    }

    /// Outcomes of sources that failed fatally.
    pub fn failures(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    /// Returns `true` if any source failed fatally.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(SourceOutcome::is_failed)
    }

    /// Total number of messages read across successful sources.
    pub fn message_count(&self) -> usize {
        self.outcomes.iter().map(SourceOutcome::message_count).sum()
    }

    /// Consumes the ingestion and returns one message batch per successful
    /// source, in caller order.
    ///
    /// # Errors
    ///
    /// With [`FailurePolicy::Abort`], returns
    /// [`ChatstatsError::SourcesFailed`] listing every failed source.
    /// With [`FailurePolicy::Skip`], failed sources are reported as warnings
    /// and left out.
    pub fn into_batches(
        self,
        policy: FailurePolicy,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<Vec<MessageRecord>>> {
        let mut batches = Vec::with_capacity(self.outcomes.len());
        let mut failures = Vec::new();

        for outcome in self.outcomes {
            match outcome.result {
                Ok(messages) => batches.push(messages),
                Err(error) => failures.push(SourceFailure::new(outcome.path, error)),
            }
        }

        if failures.is_empty() {
            return Ok(batches);
        }

        match policy {
            FailurePolicy::Abort => Err(ChatstatsError::SourcesFailed { failures }),
            FailurePolicy::Skip => {
                for failure in &failures {
                    diagnostics.warn(&format!("Skipping {failure}"));
                }
                Ok(batches)
            }
        }
    }
}

/// Reads every source concurrently and waits for all of them.
///
/// At most [`IngestConfig::worker_count`] sources are read at once. The
/// returned outcomes follow the order of `paths`, regardless of which read
/// finished first.
///
/// # Errors
///
/// Only fails if the thread pool cannot be created. Per-source failures are
/// recorded in the returned [`Ingestion`].
pub fn read_sources<P>(
    reader: &dyn SourceReader,
    paths: &[P],
    config: &IngestConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<Ingestion>
where
    P: AsRef<Path> + Sync,
{
    if paths.is_empty() {
        return Ok(Ingestion::default());
    }

    let workers = config.worker_count(paths.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("chatstats-reader-{i}"))
        .build()
        .map_err(|e| ChatstatsError::WorkerPool(e.to_string()))?;

    diagnostics.info(&format!(
        "Reading {} source(s) with {} {} reader(s)",
        paths.len(),
        workers,
        reader.name()
    ));

    let outcomes = pool.install(|| {
        paths
            .par_iter()
            .map(|path| read_one(reader, path.as_ref(), diagnostics))
            .collect::<Vec<_>>()
    });

    Ok(Ingestion { outcomes })
}

fn read_one(
    reader: &dyn SourceReader,
    path: &Path,
    diagnostics: &dyn Diagnostics,
) -> SourceOutcome {
    let scoped = SourceDiagnostics::new(diagnostics);
    let result = reader.read(path, &scoped);
    SourceOutcome {
        path: path.to_path_buf(),
        result,
        warnings: scoped.into_warnings(),
    }
}

/// Forwards to the caller's sink and keeps this source's warnings.
struct SourceDiagnostics<'a> {
    inner: &'a dyn Diagnostics,
    warnings: Mutex<Vec<String>>,
}

impl<'a> SourceDiagnostics<'a> {
    fn new(inner: &'a dyn Diagnostics) -> Self {
        Self {
            inner,
            warnings: Mutex::new(Vec::new()),
        }
    }

    fn into_warnings(self) -> Vec<String> {
        self.warnings
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Diagnostics for SourceDiagnostics<'_> {
    fn warn(&self, message: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        self.inner.warn(message);
    }

    fn info(&self, message: &str) {
        self.inner.info(message);
    }
}
