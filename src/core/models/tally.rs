//! Insertion-ordered tallies for grouped statistics

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::AddAssign;

/// Running totals keyed by name, kept in first-seen order
///
/// Serializes as a JSON object whose keys appear in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tally<V> {
    entries: Vec<(String, V)>,
}

impl<V: Copy + Default + AddAssign> Tally<V> {
    /// Create an empty tally
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `amount` to the total for `key`, creating it at the end if new
    pub fn add(&mut self, key: &str, amount: V) {
        if let Some((_, total)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            *total += amount;
        } else {
            let mut total = V::default();
            total += amount;
            self.entries.push((key.to_string(), total));
        }
    }

    /// Total for `key`, if it has been seen
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, total)| *total)
    }

    /// Total for `key`, or zero
    #[must_use]
    pub fn get_or_zero(&self, key: &str) -> V {
        self.get(key).unwrap_or_default()
    }
}

impl<V> Tally<V> {
    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been tallied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Serialize> Serialize for Tally<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
