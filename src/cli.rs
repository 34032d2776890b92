//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Report format options
//! - [`ChartKind`] - What to chart

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{FailurePolicy, IngestConfig, MessengerConfig};
use crate::core::ChartMetric;

/// Per-sender message, word, and character statistics for Messenger
/// chat exports, with keyword counting.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats message_1.json
    chatstats message_1.json message_2.json -k hello -k world
    chatstats inbox/*.json -k blah -o report.csv
    chatstats message_1.json --format jsonl -o report.jsonl
    chatstats message_1.json --chart words --chart-data words.json")]
pub struct Args {
    /// Exported conversation files, read in the order given
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<String>,

    /// Debug logging and per-person top words
    #[arg(short, long)]
    pub verbose: bool,

    /// Keyword to count (repeatable)
    #[arg(short = 'k', long = "keyword", value_name = "WORD")]
    pub keywords: Vec<String>,

    /// Write the per-person report to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Maximum number of files read at once
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Skip files that cannot be parsed instead of aborting
    #[arg(long)]
    pub skip_failed: bool,

    /// Repair mis-encoded non-ASCII text in Messenger exports
    #[arg(long)]
    pub fix_encoding: bool,

    /// Statistic to chart
    #[arg(long, value_enum, value_name = "METRIC")]
    pub chart: Option<ChartKind>,

    /// Write chart data as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub chart_data: Option<String>,
}

impl Args {
    /// Reader configuration selected by the flags.
    pub fn messenger_config(&self) -> MessengerConfig {
        MessengerConfig::new().with_fix_encoding(self.fix_encoding)
    }

    /// Read-phase configuration selected by the flags.
    pub fn ingest_config(&self) -> IngestConfig {
        let policy = if self.skip_failed {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };
        IngestConfig::new()
            .with_max_workers(self.jobs.unwrap_or(0))
            .with_failure_policy(policy)
    }

    /// The chart to produce, if any. `--chart-data` alone charts messages.
    pub fn chart_kind(&self) -> Option<ChartKind> {
        self.chart
            .or_else(|| self.chart_data.as_ref().map(|_| ChartKind::Messages))
    }
}

/// Report format options.
///
/// # Example
///
/// ```rust
/// use chatstats::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("Extension: {}", format.extension()); // "jsonl"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of person rows
    Json,

    /// JSON Lines - one person per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// What `--chart` draws: one slice per sender, or one per keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Messages per sender
    Messages,
    /// Words per sender
    Words,
    /// Characters per sender
    #[value(alias = "characters")]
    Chars,
    /// Total usage per keyword
    Keywords,
}

impl ChartKind {
    /// The per-sender metric, or `None` for keyword charts.
    pub fn metric(&self) -> Option<ChartMetric> {
        match self {
            ChartKind::Messages => Some(ChartMetric::Messages),
            ChartKind::Words => Some(ChartMetric::Words),
            ChartKind::Chars => Some(ChartMetric::Chars),
            ChartKind::Keywords => None,
        }
    }
}
