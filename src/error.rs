//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library, plus [`SourceFailure`] which attributes a fatal read
//! error to the source that produced it.
//!
//! # Error Taxonomy
//!
//! - **Missing source**: not an error. The source degrades to zero messages
//!   and a warning goes to the diagnostics sink.
//! - **Parse error**: the content is not valid JSON. Fatal for that source
//!   only ([`ChatstatsError::Parse`]).
//! - **Missing field**: a message object lacks a field. A default is
//!   substituted; never an error.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred outside of source reading (e.g. writing a report).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A source exists but could not be read.
    ///
    /// A source that does not exist at all is *not* reported here; it
    /// degrades to an empty message list.
    #[error("Failed to read {}: {source}", path.display())]
    SourceIo {
        /// The source path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to parse a source.
    ///
    /// Contains the format being parsed, the underlying parse error,
    /// and optionally the file path.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "Messenger JSON")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// One or more sources failed fatally and the run was aborted.
    #[error("{} source(s) failed: {}", failures.len(), SourceFailure::join(failures))]
    SourcesFailed {
        /// Every failed source, in caller order
        failures: Vec<SourceFailure>,
    },

    /// Unknown or unsupported format name.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected (e.g. "output", "schema")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The reader thread pool could not be built.
    #[error("Failed to start reader pool: {0}")]
    WorkerPool(String),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error outside of source parsing.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// JSON parsing error
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// A fatal error attributed to a single source.
#[derive(Debug)]
pub struct SourceFailure {
    /// The source that failed
    pub path: PathBuf,
    /// Why it failed
    pub error: ChatstatsError,
}

impl SourceFailure {
    pub fn new(path: impl Into<PathBuf>, error: ChatstatsError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }

    fn join(failures: &[SourceFailure]) -> String {
        failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a parse error for the Messenger format.
    pub fn messenger_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatstatsError::Parse {
            format: "Messenger JSON",
            source: ParseErrorKind::Json(source),
            path,
        }
    }

    /// Creates a read error for a source that exists but could not be read.
    pub fn source_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatsError::SourceIo {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_) | ChatstatsError::SourceIo { .. })
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatstatsError::Parse { .. })
    }

    /// Returns `true` if this is a format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }

    /// Returns `true` if the run was aborted because sources failed.
    pub fn is_sources_failed(&self) -> bool {
        matches!(self, ChatstatsError::SourcesFailed { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatstatsError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_source_io_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ChatstatsError::source_io("/tmp/locked.json", io_err);
        let display = err.to_string();
        assert!(display.contains("/tmp/locked.json"));
        assert!(display.contains("denied"));
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_error_with_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err =
            ChatstatsError::messenger_parse(json_err, Some(PathBuf::from("/path/to/file.json")));
        let display = err.to_string();
        assert!(display.contains("Messenger JSON"));
        assert!(display.contains("/path/to/file.json"));
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_error_without_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1, 2").unwrap_err();
        let err = ChatstatsError::messenger_parse(json_err, None);
        let display = err.to_string();
        assert!(display.contains("EOF"));
        assert!(!display.contains("file:"));
    }

    #[test]
    fn test_sources_failed_lists_every_source() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ChatstatsError::SourcesFailed {
            failures: vec![
                SourceFailure::new("a.json", ChatstatsError::messenger_parse(bad, None)),
                SourceFailure::new(
                    "b.json",
                    ChatstatsError::source_io("b.json", io::Error::other("boom")),
                ),
            ],
        };
        let display = err.to_string();
        assert!(display.starts_with("2 source(s) failed"));
        assert!(display.contains("a.json"));
        assert!(display.contains("b.json"));
        assert!(err.is_sources_failed());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_invalid_format() {
        let err = ChatstatsError::invalid_format("output", "Unknown file extension: '.txt'");
        assert!(err.to_string().contains("Invalid output format"));
        assert!(err.is_invalid_format());
        assert!(!err.is_io());
    }

    #[test]
    fn test_worker_pool_display() {
        let err = ChatstatsError::WorkerPool("no threads".into());
        assert!(err.to_string().contains("no threads"));
    }

    #[test]
    fn test_utf8_from() {
        let bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(bytes).unwrap_err();
        let err = ChatstatsError::from(utf8_err);
        assert!(err.to_string().contains("output conversion"));
    }
}
