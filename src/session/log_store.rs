//! Append-only, insertion-ordered log

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{LogEntry, SupplementEntry, WeightEntry};

/// Entries that belong to a calendar date
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for LogEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for SupplementEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for WeightEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Ordered sequence of entries for one session
///
/// Entries can only be appended; nothing is mutated or removed.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LogStore<T> {
    entries: Vec<T>,
}

impl<T> Default for LogStore<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> LogStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return a reference to it
    pub fn append(&mut self, entry: T) -> &T {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: Dated> LogStore<T> {
    /// Entries logged on `date`, in insertion order
    pub fn for_date(&self, date: NaiveDate) -> impl Iterator<Item = &T> {
        self.entries.iter().filter(move |e| e.date() == date)
    }
}

impl<T> FromIterator<T> for LogStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(day: u32, kg: f64) -> WeightEntry {
        WeightEntry::new(NaiveDate::from_ymd_opt(2025, 2, day).unwrap(), kg).unwrap()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = LogStore::new();
        store.append(weight(3, 80.0));
        store.append(weight(1, 81.0));
        store.append(weight(2, 80.5));

        let kgs: Vec<f64> = store.iter().map(|w| w.weight_kg).collect();
        assert_eq!(kgs, vec![80.0, 81.0, 80.5]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_for_date_filters() {
        let store: LogStore<WeightEntry> =
            vec![weight(1, 81.0), weight(2, 80.5), weight(1, 80.9)].into_iter().collect();
        let day1 = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        let kgs: Vec<f64> = store.for_date(day1).map(|w| w.weight_kg).collect();
        assert_eq!(kgs, vec![81.0, 80.9]);
    }
}
