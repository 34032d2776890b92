//! Per-person report rows and their writers.
//!
//! [`build_report`] flattens an [`Aggregator`] into one [`PersonReport`] per
//! sender. The rows can then be written as:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one person per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::Aggregator;
//! use chatstats::core::output::{build_report, to_csv, write_json};
//!
//! let aggregator = Aggregator::from_sources(&["message_1.json"])?;
//! let report = build_report(&aggregator, &["hello", "world"]);
//!
//! write_json(&report, "report.json")?;
//! let csv_string = to_csv(&report)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use serde::Serialize;

use super::aggregator::Aggregator;
use super::keywords::KeywordCounts;
use super::profile::PersonProfile;

/// One output row: a sender's totals and keyword counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonReport {
    pub name: String,
    pub messages: usize,
    pub words: usize,
    pub characters: usize,
    #[serde(skip_serializing_if = "KeywordCounts::is_empty")]
    pub keywords: KeywordCounts,
}

impl PersonReport {
    /// Builds the row for one profile.
    pub fn from_profile<S: AsRef<str>>(profile: &PersonProfile, keywords: &[S]) -> Self {
        let stats = profile.basic_info();
        Self {
            name: profile.name().to_string(),
            messages: stats.messages_sent,
            words: stats.word_count,
            characters: stats.char_count,
            keywords: profile.count(keywords),
        }
    }
}

/// One [`PersonReport`] per sender, in the aggregator's order.
///
/// Every row carries the same keyword columns, in the order given.
pub fn build_report<S: AsRef<str>>(aggregator: &Aggregator, keywords: &[S]) -> Vec<PersonReport> {
    aggregator
        .persons()
        .iter()
        .map(|profile| PersonReport::from_profile(profile, keywords))
        .collect()
}
