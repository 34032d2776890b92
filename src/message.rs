//! The parsed message value.
//!
//! [`MessageRecord`] is what every [`SourceReader`](crate::reader::SourceReader)
//! produces and what every [`PersonProfile`](crate::core::PersonProfile) owns.
//! Once constructed it cannot be changed: fields are private and exposed only
//! through accessors.
//!
//! # Examples
//!
//! ```
//! use chatstats::MessageRecord;
//!
//! let msg = MessageRecord::new("Alice", "Hello, world!")
//!     .with_sent_at(1_705_315_800_000_000_000);
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.text(), "Hello, world!");
//! assert!(msg.sent_at_datetime().is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::keywords::{KeywordCounts, count_keywords};

/// One parsed chat message.
///
/// | Field | Type | Default when absent |
/// |-------|------|---------------------|
/// | `sender` | `String` | `""` |
/// | `text` | `String` | `""` |
/// | `sent_at` | `Option<i64>` | `None` (nanoseconds since the Unix epoch) |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    sender: String,

    #[serde(default)]
    text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    sent_at: Option<i64>,
}

impl MessageRecord {
    /// Creates a message without a timestamp.
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            sent_at: None,
        }
    }

    /// Creates a message with every field specified.
    pub fn with_metadata(
        sender: impl Into<String>,
        text: impl Into<String>,
        sent_at: Option<i64>,
    ) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            sent_at,
        }
    }

    /// Builder method to set the send time in nanoseconds since the epoch.
    #[must_use]
    pub fn with_sent_at(mut self, timestamp_ns: i64) -> Self {
        self.sent_at = Some(timestamp_ns);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the raw message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the send time in nanoseconds since the epoch, if known.
    pub fn sent_at(&self) -> Option<i64> {
        self.sent_at
    }

    /// Returns the send time as a UTC datetime, if known.
    pub fn sent_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.sent_at.map(DateTime::from_timestamp_nanos)
    }

    /// Returns `true` if the text is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Counts keyword occurrences in this message.
    ///
    /// See [`count_keywords`] for the matching rules.
    pub fn count<S: AsRef<str>>(&self, keywords: &[S]) -> KeywordCounts {
        count_keywords(&self.text, keywords)
    }
}
