//! Injected logging collaborator.
//!
//! Readers and the aggregator never configure logging themselves. They report
//! warnings (an unresolvable source, a skipped failure) and informational
//! events through a [`Diagnostics`] implementation handed to them by the
//! caller.
//!
//! # Provided sinks
//!
//! - [`TracingDiagnostics`] forwards to the `tracing` facade. This is what
//!   [`Aggregator::from_sources`](crate::core::Aggregator::from_sources) uses.
//! - [`RecordingDiagnostics`] keeps every event in memory so callers can
//!   inspect or display them later.
//! - [`SilentDiagnostics`] drops everything.
//!
//! # Example
//!
//! ```rust
//! use chatstats::diagnostics::{Diagnostics, RecordingDiagnostics, Level};
//!
//! let sink = RecordingDiagnostics::new();
//! sink.warn("Unable to read from missing.json, file does not exist");
//!
//! assert_eq!(sink.warnings().len(), 1);
//! assert_eq!(sink.events()[0].level, Level::Warn);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Minimal logging interface used throughout the library.
pub trait Diagnostics: Send + Sync {
    /// Reports a non-fatal problem.
    fn warn(&self, message: &str);

    /// Reports an informational event.
    fn info(&self, message: &str);
}

/// Forwards every event to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn warn(&self, _message: &str) {}

    fn info(&self, _message: &str) {}
}

/// Severity of a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Info,
}

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub level: Level,
    pub message: String,
}

/// Keeps events in memory, in the order they were reported.
///
/// Safe to share between reader threads.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<Event>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every event.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Returns the messages of every warning.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warn)
    }

    /// Returns the messages of every informational event.
    pub fn infos(&self) -> Vec<String> {
        self.messages(Level::Info)
    }

    fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|event| event.level == level)
            .map(|event| event.message.clone())
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.lock().push(Event {
            level,
            message: message.to_string(),
        });
    }

    // A panicking reader thread must not hide the events recorded so far.
    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }
}
