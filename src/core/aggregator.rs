//! Top-level container of per-sender profiles.
//!
//! An [`Aggregator`] is built from a set of sources (read concurrently, then
//! grouped in caller order) or from existing profiles. It answers
//! cross-profile questions: keyword totals, grand totals, and chart data for
//! an external renderer.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::core::Aggregator;
//!
//! let aggregator = Aggregator::from_sources(&["message_1.json", "message_2.json"])?;
//!
//! for person in aggregator.persons() {
//!     println!("{}: {} messages", person.name(), person.message_count());
//! }
//! println!("{:?}", aggregator.count(&["hello", "world", "blah"]));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::index::AggregationIndex;
use super::keywords::KeywordCounts;
use super::profile::{BasicStats, PersonProfile};
use crate::config::{FailurePolicy, IngestConfig};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::Result;
use crate::ingest::{Ingestion, read_sources};
use crate::reader::SourceReader;
use crate::readers::MessengerReader;

/// Sender name → [`PersonProfile`], in insertion order.
///
/// Query methods take `&self` and may run concurrently. [`add_person`]
/// needs `&mut self`.
///
/// [`add_person`]: Aggregator::add_person
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    profiles: Vec<PersonProfile>,
    positions: HashMap<String, usize>,
}

impl Aggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an aggregator from existing profiles.
    ///
    /// Profiles with a repeated name replace the earlier one, as with
    /// [`add_person`](Self::add_person).
    pub fn from_profiles<I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = PersonProfile>,
    {
        let mut aggregator = Self::new();
        for profile in profiles {
            aggregator.add_person(profile);
        }
        aggregator
    }

    /// Wraps a finished grouping.
    pub fn from_index(index: AggregationIndex) -> Self {
        Self::from_profiles(index.into_profiles())
    }

    /// Reads Messenger exports concurrently and aggregates them.
    ///
    /// Uses the default [`IngestConfig`] (abort if any source fails, listing
    /// every failure) and reports through `tracing`. Missing files only
    /// produce a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::SourcesFailed`](crate::ChatstatsError::SourcesFailed)
    /// if any source exists but cannot be read or parsed.
    pub fn from_sources<P>(paths: &[P]) -> Result<Self>
    where
        P: AsRef<Path> + Sync,
    {
        Self::from_sources_with(
            &MessengerReader::new(),
            paths,
            &IngestConfig::default(),
            &TracingDiagnostics,
        )
    }

    /// Like [`from_sources`](Self::from_sources) with an explicit reader,
    /// configuration, and diagnostics sink.
    ///
    /// # Errors
    ///
    /// Fails if the reader pool cannot be built, or if a source fails and
    /// the policy is [`FailurePolicy::Abort`].
    pub fn from_sources_with<P>(
        reader: &dyn SourceReader,
        paths: &[P],
        config: &IngestConfig,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self>
    where
        P: AsRef<Path> + Sync,
    {
        let ingestion = read_sources(reader, paths, config, diagnostics)?;
        Self::from_ingestion(ingestion, config.failure_policy, diagnostics)
    }

    /// Groups a completed read phase.
    ///
    /// # Errors
    ///
    /// See [`Ingestion::into_batches`].
    pub fn from_ingestion(
        ingestion: Ingestion,
        policy: FailurePolicy,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self> {
        let batches = ingestion.into_batches(policy, diagnostics)?;
        let index = AggregationIndex::build(batches);
        tracing::debug!(senders = index.len(), "grouped sources");
        Ok(Self::from_index(index))
    }

    /// Inserts `profile`, replacing any profile with the same name.
    ///
    /// Last write wins: message lists are not merged. The replaced profile is
    /// returned and the replacement keeps the original position.
    pub fn add_person(&mut self, profile: PersonProfile) -> Option<PersonProfile> {
        match self.positions.get(profile.name()) {
            Some(&i) => Some(std::mem::replace(&mut self.profiles[i], profile)),
            None => {
                self.positions
                    .insert(profile.name().to_string(), self.profiles.len());
                self.profiles.push(profile);
                None
            }
        }
    }

    /// Keyword totals across every profile.
    ///
    /// Every keyword is present in the result, including unused ones.
    pub fn count<S: AsRef<str>>(&self, keywords: &[S]) -> KeywordCounts {
        let mut totals = KeywordCounts::with_keywords(keywords);
        for profile in &self.profiles {
            totals.merge(&profile.count(keywords));
        }
        totals
    }

    /// Returns the profile for `name`.
    pub fn person(&self, name: &str) -> Option<&PersonProfile> {
        self.positions.get(name).map(|&i| &self.profiles[i])
    }

    /// All profiles in insertion order.
    pub fn persons(&self) -> &[PersonProfile] {
        &self.profiles
    }

    /// Sender names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(PersonProfile::name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Summed [`BasicStats`] of every profile.
    pub fn totals(&self) -> BasicStats {
        self.profiles.iter().map(PersonProfile::basic_info).sum()
    }

    /// Total number of messages across every profile.
    pub fn message_count(&self) -> usize {
        self.profiles.iter().map(PersonProfile::message_count).sum()
    }

    /// One value per sender for `metric`, in insertion order.
    pub fn chart_data(&self, metric: ChartMetric) -> ChartData {
        let labels = self.names().map(str::to_string).collect();
        let values = self
            .profiles
            .iter()
            .map(|p| match metric {
                ChartMetric::Messages => p.message_count(),
                ChartMetric::Words => p.word_count(),
                ChartMetric::Chars => p.char_count(),
            })
            .collect();
        ChartData::new(labels, values, metric.title())
    }

    /// One value per keyword: its total across every profile.
    pub fn keyword_chart_data<S: AsRef<str>>(&self, keywords: &[S]) -> ChartData {
        let counts = self.count(keywords);
        let (labels, values): (Vec<String>, Vec<usize>) = counts
            .iter()
            .map(|(keyword, count)| (keyword.to_string(), count))
            .unzip();
        ChartData::new(labels, values, "Keyword usage")
    }
}

impl<'a> IntoIterator for &'a Aggregator {
    type Item = &'a PersonProfile;
    type IntoIter = std::slice::Iter<'a, PersonProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}

/// Per-sender statistic to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    Messages,
    Words,
    Chars,
}

impl ChartMetric {
    /// Default chart title for this metric.
    pub fn title(&self) -> &'static str {
        match self {
            ChartMetric::Messages => "Messages sent",
            ChartMetric::Words => "Words sent",
            ChartMetric::Chars => "Characters sent",
        }
    }
}

/// Labels and values for a pie chart, ready for an external renderer.
///
/// `labels[i]` belongs to `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub title: String,
}

impl ChartData {
    pub fn new(labels: Vec<String>, values: Vec<usize>, title: impl Into<String>) -> Self {
        Self {
            labels,
            values,
            title: title.into(),
        }
    }

    /// Sum of all values.
    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }
}
