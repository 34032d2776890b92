//! Per-sender message collections and their statistics.
//!
//! A [`PersonProfile`] owns one sender's messages in the order they were read.
//! The message list is fixed at construction, so every derived statistic is
//! computed at most once and cached for the life of the profile. The caches
//! are `OnceLock`s: profiles can be queried from several threads at once
//! without external locking.
//!
//! # Example
//!
//! ```
//! use chatstats::MessageRecord;
//! use chatstats::core::PersonProfile;
//!
//! let alice = PersonProfile::new("Alice", vec![
//!     MessageRecord::new("Alice", "Hello world"),
//!     MessageRecord::new("Alice", "hello again"),
//! ]);
//!
//! assert_eq!(alice.message_count(), 2);
//! assert_eq!(alice.word_count(), 4);
//! assert_eq!(alice.word_frequencies()["hello"], 2);
//! ```

use std::collections::HashMap;
use std::ops::{Add, AddAssign};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::keywords::KeywordCounts;
use crate::MessageRecord;

/// Message, word, and character totals for one sender (or a group of them).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicStats {
    pub messages_sent: usize,
    pub word_count: usize,
    pub char_count: usize,
}

impl BasicStats {
    pub fn new(messages_sent: usize, word_count: usize, char_count: usize) -> Self {
        Self {
            messages_sent,
            word_count,
            char_count,
        }
    }

    /// Average words per message, 0.0 when there are no messages.
    pub fn words_per_message(&self) -> f64 {
        if self.messages_sent == 0 {
            return 0.0;
        }
        self.word_count as f64 / self.messages_sent as f64
    }
}

impl Add for BasicStats {
    type Output = BasicStats;

    fn add(self, rhs: BasicStats) -> BasicStats {
        BasicStats {
            messages_sent: self.messages_sent + rhs.messages_sent,
            word_count: self.word_count + rhs.word_count,
            char_count: self.char_count + rhs.char_count,
        }
    }
}

impl AddAssign for BasicStats {
    fn add_assign(&mut self, rhs: BasicStats) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for BasicStats {
    fn sum<I: Iterator<Item = BasicStats>>(iter: I) -> Self {
        iter.fold(BasicStats::default(), Add::add)
    }
}

/// One sender and the messages they sent.
#[derive(Debug)]
pub struct PersonProfile {
    name: String,
    messages: Vec<MessageRecord>,
    words: OnceLock<HashMap<String, usize>>,
    word_count: OnceLock<usize>,
    char_count: OnceLock<usize>,
}

impl PersonProfile {
    /// Creates a profile owning `messages`.
    ///
    /// The messages are not checked against `name`; grouping is the job of
    /// [`AggregationIndex`](super::AggregationIndex).
    pub fn new(name: impl Into<String>, messages: Vec<MessageRecord>) -> Self {
        Self {
            name: name.into(),
            messages,
            words: OnceLock::new(),
            word_count: OnceLock::new(),
            char_count: OnceLock::new(),
        }
    }

    /// Returns the sender name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owned messages in order.
    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    /// Case-folded, whitespace-split word → occurrence count.
    pub fn word_frequencies(&self) -> &HashMap<String, usize> {
        self.words.get_or_init(|| {
            let mut words: HashMap<String, usize> = HashMap::new();
            for msg in &self.messages {
                for word in msg.text().to_lowercase().split_whitespace() {
                    *words.entry(word.to_string()).or_insert(0) += 1;
                }
            }
            words
        })
    }

    /// Total number of words sent.
    pub fn word_count(&self) -> usize {
        *self
            .word_count
            .get_or_init(|| self.word_frequencies().values().sum())
    }

    /// Total number of characters sent, counted as Unicode scalar values of
    /// the raw text.
    pub fn char_count(&self) -> usize {
        *self
            .char_count
            .get_or_init(|| self.messages.iter().map(|m| m.text().chars().count()).sum())
    }

    /// Number of messages sent.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Messages, words, and characters as one value.
    pub fn basic_info(&self) -> BasicStats {
        BasicStats::new(self.message_count(), self.word_count(), self.char_count())
    }

    /// Keyword occurrences summed over every owned message.
    ///
    /// Every keyword appears in the result, including those never used.
    pub fn count<S: AsRef<str>>(&self, keywords: &[S]) -> KeywordCounts {
        let mut totals = KeywordCounts::with_keywords(keywords);
        for msg in &self.messages {
            totals.merge(&msg.count(keywords));
        }
        totals
    }

    /// The `n` most frequent words, most frequent first. Ties are ordered
    /// alphabetically.
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        let mut words: Vec<(&str, usize)> = self
            .word_frequencies()
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }

    /// Earliest known send time among the owned messages.
    pub fn first_sent_at(&self) -> Option<DateTime<Utc>> {
        self.messages.iter().filter_map(|m| m.sent_at_datetime()).min()
    }

    /// Latest known send time among the owned messages.
    pub fn last_sent_at(&self) -> Option<DateTime<Utc>> {
        self.messages.iter().filter_map(|m| m.sent_at_datetime()).max()
    }
}

impl Clone for PersonProfile {
    fn clone(&self) -> Self {
        Self::new(self.name.clone(), self.messages.clone())
    }
}
