//! Report format types for the chatstats library.
//!
//! These types don't depend on CLI frameworks and can be used from any
//! library code.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::core::{Aggregator, build_report};
//! use chatstats::format::{OutputFormat, write_to_format};
//!
//! let aggregator = Aggregator::from_sources(&["message_1.json"])?;
//! let report = build_report(&aggregator, &["hello"]);
//!
//! // Detect format from the extension
//! let format = OutputFormat::from_path("report.jsonl")?;
//! write_to_format(&report, "report.jsonl", format)?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::output::PersonReport;
use crate::error::ChatstatsError;

/// Report output format.
///
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited table, one row per person
/// - [`Json`](OutputFormat::Json) - pretty JSON array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
///
/// # Example
///
/// ```rust
/// use chatstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of person rows
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.ndjson").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("out.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatstatsError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatstatsError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    report: &[PersonReport],
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a report to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    report: &[PersonReport],
    format: OutputFormat,
) -> Result<String, ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(report),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "Output format {format:?} requires the '{}' feature to be enabled",
            match format {
                OutputFormat::Csv => "csv-output",
                OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            }
        ),
    )
}
