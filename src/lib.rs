//! # Chatstats
//!
//! A Rust library for computing per-sender statistics and keyword counts from
//! Facebook Messenger chat exports.
//!
//! ## Overview
//!
//! Chatstats reads one or more exported conversation files concurrently,
//! groups every message by sender (keeping the order of the sources you pass
//! and the order of messages inside each one), and answers questions like:
//!
//! - how many messages, words, and characters did each person send?
//! - how often did each person use a given keyword?
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let aggregator = Aggregator::from_sources(&["message_1.json", "message_2.json"])?;
//!
//!     for person in aggregator.persons() {
//!         let stats = person.basic_info();
//!         println!(
//!             "{}: {} messages, {} words, {} characters",
//!             person.name(),
//!             stats.messages_sent,
//!             stats.word_count,
//!             stats.char_count
//!         );
//!     }
//!
//!     let keywords = aggregator.count(&["hello", "world", "blah"]);
//!     println!("{}", serde_json::to_string(&keywords)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Keyword Counting
//!
//! Keywords are matched case-insensitively as plain substrings, longest
//! first, and each match is removed before shorter keywords are tried. See
//! [`core::keywords`] for details.
//!
//! ## Module Structure
//!
//! - [`reader`] - [`SourceReader`](reader::SourceReader) trait and [`ExportSchema`](reader::ExportSchema)
//! - [`readers`] - Concrete readers ([`MessengerReader`](readers::MessengerReader))
//! - [`parsing`] - Raw Messenger export structures
//! - [`ingest`] - Concurrent read phase ([`read_sources`](ingest::read_sources))
//! - [`core`] - Grouping, statistics, keyword counting, report writers
//! - [`config`] - [`MessengerConfig`](config::MessengerConfig), [`IngestConfig`](config::IngestConfig)
//! - [`diagnostics`] - Injected logging sink
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`write_to_format`](format::write_to_format)
//! - [`error`] - Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod ingest;
pub mod message;
pub mod parsing;
pub mod reader;
pub mod readers;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Reading
    pub use crate::config::{FailurePolicy, IngestConfig, MessengerConfig};
    pub use crate::diagnostics::{
        Diagnostics, RecordingDiagnostics, SilentDiagnostics, TracingDiagnostics,
    };
    pub use crate::ingest::{Ingestion, read_sources};
    pub use crate::reader::{ExportSchema, SourceReader, create_reader};
    pub use crate::readers::MessengerReader;

    // Aggregation
    pub use crate::core::{
        AggregationIndex, Aggregator, BasicStats, ChartData, ChartMetric, KeywordCounts,
        PersonProfile, PersonReport, build_report, count_keywords,
    };

    // Output
    pub use crate::format::{OutputFormat, write_to_format};
}
