//! Source reader trait for chat exports.
//!
//! A [`SourceReader`] turns one source (an export file) into an ordered list of
//! [`MessageRecord`]s. There is one implementation per supported export
//! schema; grouping and statistics never depend on which one produced the
//! records.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::diagnostics::TracingDiagnostics;
//! use chatstats::reader::{ExportSchema, create_reader};
//! use std::path::Path;
//!
//! let reader = create_reader(ExportSchema::Messenger);
//! let messages = reader.read(Path::new("message_1.json"), &TracingDiagnostics)?;
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```
//!
//! # Missing sources
//!
//! A source that does not exist is not an error: [`load_source`] reports a
//! warning through the diagnostics sink and readers return zero messages.
//! A source that exists but cannot be read, or cannot be parsed, is an error
//! for that source.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::diagnostics::Diagnostics;
use crate::error::ChatstatsError;

/// Supported export schemas.
///
/// # Example
///
/// ```rust
/// use chatstats::reader::ExportSchema;
/// use std::str::FromStr;
///
/// assert_eq!(ExportSchema::from_str("fb").unwrap(), ExportSchema::Messenger);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportSchema {
    /// Facebook Messenger JSON export (`message_N.json`)
    #[default]
    #[serde(alias = "facebook", alias = "fb")]
    Messenger,
}

impl ExportSchema {
    /// Returns the default file extension for this schema.
    pub fn default_extension(&self) -> &'static str {
        match self {
            ExportSchema::Messenger => "json",
        }
    }

    /// Returns all schema names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["messenger", "facebook", "fb"]
    }

    /// Returns all available schemas.
    pub fn all() -> &'static [ExportSchema] {
        &[ExportSchema::Messenger]
    }
}

impl std::fmt::Display for ExportSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportSchema::Messenger => write!(f, "Messenger"),
        }
    }
}

impl std::str::FromStr for ExportSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "messenger" | "facebook" | "fb" => Ok(ExportSchema::Messenger),
            _ => Err(format!(
                "Unknown schema: '{}'. Expected one of: {}",
                s,
                ExportSchema::all_names().join(", ")
            )),
        }
    }
}

/// Reads one source into an ordered list of messages.
///
/// Implementations must be `Send + Sync`: the ingestion phase shares a single
/// reader between its worker threads.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl SourceReader for MyReader {
///     fn name(&self) -> &'static str { "MyReader" }
///     fn schema(&self) -> ExportSchema { ExportSchema::Messenger }
///
///     fn read(&self, path: &Path, diagnostics: &dyn Diagnostics) -> Result<Vec<MessageRecord>, ChatstatsError> {
///         match load_source(path, diagnostics)? {
///             Some(content) => self.read_str(&content),
///             None => Ok(Vec::new()),
///         }
///     }
///
///     fn read_str(&self, content: &str) -> Result<Vec<MessageRecord>, ChatstatsError> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait SourceReader: Send + Sync {
    /// Returns the human-readable name of this reader.
    fn name(&self) -> &'static str;

    /// Returns the schema this reader handles.
    fn schema(&self) -> ExportSchema;

    /// Reads and parses one source.
    ///
    /// # Errors
    ///
    /// - [`ChatstatsError::SourceIo`] if the source exists but cannot be read
    /// - [`ChatstatsError::Parse`] if the content is not valid for the schema
    ///
    /// A missing source is *not* an error: it yields an empty list and a
    /// warning on `diagnostics`.
    fn read(
        &self,
        path: &Path,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<MessageRecord>, ChatstatsError>;

    /// Parses content that is already in memory.
    fn read_str(&self, content: &str) -> Result<Vec<MessageRecord>, ChatstatsError>;

    /// Convenience method accepting a `&str` path.
    fn read_file(
        &self,
        path: &str,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<MessageRecord>, ChatstatsError> {
        self.read(Path::new(path), diagnostics)
    }
}

/// Loads the raw content of a source.
///
/// Returns `Ok(None)` and emits a warning when the source does not exist.
pub fn load_source(
    path: &Path,
    diagnostics: &dyn Diagnostics,
) -> Result<Option<String>, ChatstatsError> {
    tracing::debug!(path = %path.display(), "scanning source");
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            diagnostics.warn(&format!(
                "Unable to read from {}, file does not exist",
                path.display()
            ));
            Ok(None)
        }
        Err(err) => Err(ChatstatsError::source_io(path, err)),
    }
}

/// Creates a reader for the specified schema.
///
/// # Example
///
/// ```rust
/// use chatstats::reader::{ExportSchema, create_reader};
///
/// let reader = create_reader(ExportSchema::Messenger);
/// assert_eq!(reader.name(), "Messenger");
/// ```
pub fn create_reader(schema: ExportSchema) -> Box<dyn SourceReader> {
    match schema {
        ExportSchema::Messenger => Box::new(crate::readers::MessengerReader::new()),
    }
}
