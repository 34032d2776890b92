//! Sender-keyed grouping of message batches.
//!
//! [`AggregationIndex`] partitions records by sender. Batches are consumed in
//! the order given (one batch per source, in caller order), each sender's
//! messages keep their relative order, and senders are indexed in order of
//! first appearance.

use std::collections::HashMap;

use super::profile::PersonProfile;
use crate::MessageRecord;

/// Sender name → [`PersonProfile`], in first-appearance order.
///
/// # Example
///
/// ```
/// use chatstats::MessageRecord;
/// use chatstats::core::AggregationIndex;
///
/// let index = AggregationIndex::build(vec![
///     vec![MessageRecord::new("Alice", "m1"), MessageRecord::new("Bob", "x")],
///     vec![MessageRecord::new("Alice", "m2")],
/// ]);
///
/// let alice = index.get("Alice").unwrap();
/// let texts: Vec<_> = alice.messages().iter().map(|m| m.text()).collect();
/// assert_eq!(texts, ["m1", "m2"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AggregationIndex {
    profiles: Vec<PersonProfile>,
    positions: HashMap<String, usize>,
}

impl AggregationIndex {
    /// Groups a sequence of batches, consumed strictly in iteration order.
    pub fn build<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<MessageRecord>>,
    {
        Self::from_records(batches.into_iter().flatten())
    }

    /// Groups a single ordered stream of records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = MessageRecord>,
    {
        let mut groups: Vec<(String, Vec<MessageRecord>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in records {
            let index = match positions.get(record.sender()) {
                Some(&index) => index,
                None => {
                    let sender = record.sender().to_string();
                    positions.insert(sender.clone(), groups.len());
                    groups.push((sender, Vec::new()));
                    groups.len() - 1
                }
            };
            groups[index].1.push(record);
        }

        let profiles = groups
            .into_iter()
            .map(|(name, messages)| PersonProfile::new(name, messages))
            .collect();

        Self {
            profiles,
            positions,
        }
    }

    /// Returns the profile for `name`.
    pub fn get(&self, name: &str) -> Option<&PersonProfile> {
        self.positions.get(name).map(|&i| &self.profiles[i])
    }

    /// Number of distinct senders.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if no records were indexed.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterates over profiles in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, PersonProfile> {
        self.profiles.iter()
    }

    /// Consumes the index, returning profiles in first-appearance order.
    pub fn into_profiles(self) -> Vec<PersonProfile> {
        self.profiles
    }
}

impl<'a> IntoIterator for &'a AggregationIndex {
    type Item = &'a PersonProfile;
    type IntoIter = std::slice::Iter<'a, PersonProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
