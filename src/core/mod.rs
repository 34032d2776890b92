//! Core aggregation logic for chatstats.
//!
//! This module contains:
//! - [`keywords`] - Greedy longest-first keyword counting
//! - [`profile`] - Per-sender statistics ([`PersonProfile`], [`BasicStats`])
//! - [`index`] - Grouping records by sender ([`AggregationIndex`])
//! - [`aggregator`] - The top-level container ([`Aggregator`]) and chart data
//! - [`output`] - Report rows and writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::MessageRecord;
//! use chatstats::core::{AggregationIndex, Aggregator};
//!
//! let index = AggregationIndex::build(vec![
//!     vec![MessageRecord::new("Alice", "hello world")],
//!     vec![MessageRecord::new("Bob", "blah blah")],
//! ]);
//! let aggregator = Aggregator::from_index(index);
//!
//! let counts = aggregator.count(&["hello", "blah"]);
//! assert_eq!(counts.get("blah"), Some(2));
//! ```

pub mod aggregator;
pub mod index;
pub mod keywords;
pub mod output;
pub mod profile;

pub use aggregator::{Aggregator, ChartData, ChartMetric};
pub use index::AggregationIndex;
pub use keywords::{KeywordCounts, count_keywords};
pub use output::{PersonReport, build_report};
pub use profile::{BasicStats, PersonProfile};

// Re-export MessageRecord from the crate root
pub use crate::MessageRecord;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
