use crate::calendar::DateKey;
use std::collections::HashMap;

pub trait Dated {
    fn date_key(&self) -> &DateKey;
}

/// Records grouped by `DateKey`, built once per record set. Each bucket keeps
/// the records in their original order, so `first` returns what a front to
/// back scan would find.
#[derive(Debug, Clone)]
pub struct DateIndex<R> {
    records: Vec<R>,
    by_date: HashMap<DateKey, Vec<usize>>,
}

impl<R> Default for DateIndex<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            by_date: HashMap::new(),
        }
    }
}

impl<R: Dated> DateIndex<R> {
    pub fn new(records: Vec<R>) -> Self {
        let mut by_date: HashMap<DateKey, Vec<usize>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            by_date
                .entry(record.date_key().clone())
                .or_default()
                .push(position);
        }
        Self { records, by_date }
    }

    pub fn first(&self, date: &DateKey) -> Option<&R> {
        self.by_date
            .get(date)
            .and_then(|positions| positions.first())
            .map(|&position| &self.records[position])
    }

    pub fn all(&self, date: &DateKey) -> Vec<&R> {
        self.by_date
            .get(date)
            .map(|positions| positions.iter().map(|&position| &self.records[position]).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, date: &DateKey) -> usize {
        self.by_date.get(date).map_or(0, Vec::len)
    }
}

impl<R> DateIndex<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Dated> FromIterator<R> for DateIndex<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        date: DateKey,
        label: &'static str,
    }

    impl Dated for Entry {
        fn date_key(&self) -> &DateKey {
            &self.date
        }
    }

    fn entry(date: &'static str, label: &'static str) -> Entry {
        Entry {
            date: DateKey::literal(date),
            label,
        }
    }

    #[test]
    fn first_returns_earliest_inserted() {
        let index: DateIndex<Entry> = [
            entry("2025-04-10", "a"),
            entry("2025-04-11", "b"),
            entry("2025-04-10", "c"),
        ]
        .into_iter()
        .collect();

        let key = DateKey::literal("2025-04-10");
        assert_eq!(index.first(&key).map(|e| e.label), Some("a"));
        let labels: Vec<_> = index.all(&key).iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["a", "c"]);
        assert_eq!(index.count(&key), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn misses_are_empty() {
        let index = DateIndex::new(vec![entry("2025-04-10", "a")]);
        let key = DateKey::literal("2025-05-01");
        assert!(index.first(&key).is_none());
        assert!(index.all(&key).is_empty());

        let empty: DateIndex<Entry> = DateIndex::default();
        assert!(empty.is_empty());
        assert!(empty.all(&key).is_empty());
    }
}
