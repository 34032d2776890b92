//! Greedy longest-first keyword counting.
//!
//! [`count_keywords`] tallies how often each keyword appears in a piece of
//! text so that every character is credited to at most one keyword:
//!
//! 1. The text and keywords are case-folded.
//! 2. Keywords are processed from longest to shortest (in characters).
//! 3. Each keyword's non-overlapping occurrences are counted in the current
//!    text and then removed from it before the next keyword is tried.
//!
//! Matching is plain substring matching, not word-boundary aware: `"wide"`
//! matches inside `"nationwide"`.
//!
//! # Example
//!
//! ```
//! use chatstats::core::keywords::count_keywords;
//!
//! let counts = count_keywords("Worldwide", &["world", "wide"]);
//! assert_eq!(counts.get("world"), Some(1));
//! assert_eq!(counts.get("wide"), Some(1));
//!
//! let counts = count_keywords("helloworld", &["hello", "world", "lo"]);
//! assert_eq!(counts.get("lo"), Some(0));
//! ```
//!
//! # Limitations
//!
//! Keywords of equal length are processed in the order they were supplied.
//! When two such keywords overlap in the text, whichever comes first in the
//! caller's list wins the shared characters.
//!
//! Keywords that differ only in case are the same keyword: the first
//! spelling supplied is the one reported, and lookups ignore case.

use std::cmp::Reverse;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered keyword → count tally.
///
/// Keys keep the order in which keywords were first supplied and every
/// requested keyword is present, even with a count of zero. Keys are
/// compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    entries: Vec<(String, usize)>,
}

impl KeywordCounts {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tally with every keyword at zero. Duplicates, including
    /// case variants, are dropped.
    pub fn with_keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut counts = Self::new();
        for keyword in keywords {
            counts.slot(keyword.as_ref());
        }
        counts
    }

    /// Returns the count for `keyword` in any case, or `None` if it was
    /// never requested.
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.position(keyword).map(|index| self.entries[index].1)
    }

    /// Iterates over `(keyword, count)` pairs in keyword order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Returns the keywords in order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of keywords tracked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keywords are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Adds every count from `other` into `self`.
    ///
    /// Keywords unknown to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: &KeywordCounts) {
        for (keyword, count) in &other.entries {
            let index = self.slot(keyword);
            self.entries[index].1 += count;
        }
    }

    fn position(&self, keyword: &str) -> Option<usize> {
        let folded = keyword.to_lowercase();
        self.entries
            .iter()
            .position(|(k, _)| k == keyword || k.to_lowercase() == folded)
    }

    fn slot(&mut self, keyword: &str) -> usize {
        match self.position(keyword) {
            Some(index) => index,
            None => {
                self.entries.push((keyword.to_string(), 0));
                self.entries.len() - 1
            }
        }
    }
}

impl<'a> IntoIterator for &'a KeywordCounts {
    type Item = (&'a str, usize);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, usize)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for KeywordCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, count) in &self.entries {
            map.serialize_entry(keyword, count)?;
        }
        map.end()
    }
}

/// Counts keyword occurrences in `text`, longest keyword first, removing
/// each keyword's matches before the next one is counted.
///
/// Empty keywords always count zero.
pub fn count_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> KeywordCounts {
    let mut counts = KeywordCounts::with_keywords(keywords);
    if text.is_empty() {
        return counts;
    }

    let mut order: Vec<(usize, String)> = counts
        .keywords()
        .map(str::to_lowercase)
        .enumerate()
        .collect();
    order.sort_by_key(|(_, needle)| Reverse(needle.chars().count()));

    let mut remaining = text.to_lowercase();
    for (index, needle) in order {
        if needle.is_empty() || remaining.is_empty() {
            continue;
        }
        let hits = remaining.matches(needle.as_str()).count();
        if hits > 0 {
            remaining = remaining.replace(needle.as_str(), "");
            counts.entries[index].1 = hits;
        }
    }

    counts
}
