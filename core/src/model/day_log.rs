use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::time::parse_day_key;

/// Entries of one kind grouped by day-key ("Month Day, Year"). Entries
/// are only ever appended or removed by position, never reordered, so
/// insertion order within a day is chronological order.
///
/// Serialized transparently as the bare mapping, which is exactly the
/// blob layout the persistence layer stores per key. Map iteration order
/// is irrelevant; display order is recomputed from the parsed day-keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct DayLog<T> {
    days: HashMap<String, Vec<T>>,
}

impl<T> Default for DayLog<T> {
    fn default() -> Self {
        Self {
            days: HashMap::new(),
        }
    }
}

impl<T> DayLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the given day, creating the day on first use.
    pub fn append(&mut self, day_key: impl Into<String>, entry: T) {
        self.days.entry(day_key.into()).or_default().push(entry);
    }

    /// Removes the entry at `index` within `day_key`. A day never keeps
    /// an empty list: removing the last entry removes the day itself.
    /// Returns `None` for an unknown day or out-of-range index.
    pub fn remove(&mut self, day_key: &str, index: usize) -> Option<T> {
        let entries = self.days.get_mut(day_key)?;
        if index >= entries.len() {
            return None;
        }
        let removed = entries.remove(index);
        if entries.is_empty() {
            self.days.remove(day_key);
        }
        Some(removed)
    }

    pub fn get(&self, day_key: &str) -> Option<&[T]> {
        self.days.get(day_key).map(Vec::as_slice)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn entry_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day-keys sorted most recent first. Keys that do not parse back to
    /// a date sort last.
    pub fn day_keys_desc(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.days.keys().map(String::as_str).collect();
        keys.sort_by_key(|k| Reverse(parse_day_key(k)));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_groups_by_day_and_keeps_order() {
        let mut log = DayLog::new();
        log.append("August 30, 2026", "first");
        log.append("August 30, 2026", "second");
        log.append("July 4, 2026", "other day");

        assert_eq!(log.day_count(), 2);
        assert_eq!(log.entry_count(), 3);
        assert_eq!(log.get("August 30, 2026"), Some(&["first", "second"][..]));
        assert_eq!(log.get("July 4, 2026"), Some(&["other day"][..]));
    }

    #[test]
    fn remove_takes_the_indexed_entry_only() {
        let mut log = DayLog::new();
        log.append("August 30, 2026", "a");
        log.append("August 30, 2026", "b");
        log.append("August 30, 2026", "c");

        assert_eq!(log.remove("August 30, 2026", 1), Some("b"));
        assert_eq!(log.get("August 30, 2026"), Some(&["a", "c"][..]));
    }

    #[test]
    fn removing_the_last_entry_evicts_the_day() {
        let mut log = DayLog::new();
        log.append("August 30, 2026", "only");

        assert_eq!(log.remove("August 30, 2026", 0), Some("only"));
        assert!(log.is_empty());
        assert_eq!(log.get("August 30, 2026"), None);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut log = DayLog::new();
        log.append("August 30, 2026", "only");

        assert_eq!(log.remove("August 30, 2026", 1), None);
        assert_eq!(log.remove("January 1, 2020", 0), None);
        assert_eq!(log.entry_count(), 1);
    }

    #[test]
    fn day_keys_sort_most_recent_first() {
        let mut log = DayLog::new();
        log.append("July 4, 2026", ());
        log.append("December 31, 2025", ());
        log.append("August 30, 2026", ());

        assert_eq!(
            log.day_keys_desc(),
            vec!["August 30, 2026", "July 4, 2026", "December 31, 2025"]
        );
    }
}
