use std::collections::HashMap;

use tracing::debug;

use crate::ids::RecordId;
use crate::record::Record;

/// Mapping from record id to the last-seen record snapshot.
///
/// Membership is independent of which page is loaded. Entries leave the store
/// only through [`toggle`](Self::toggle), [`remove_all`](Self::remove_all) or a
/// full replace via [`merge_many`](Self::merge_many); navigation never evicts.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    entries: HashMap<RecordId, Record>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.entries.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }

    /// Remove the record if selected, insert it otherwise.
    ///
    /// Returns whether the record is selected afterwards.
    pub fn toggle(&mut self, record: &Record) -> bool {
        if self.entries.remove(&record.id).is_some() {
            false
        } else {
            self.entries.insert(record.id.clone(), record.clone());
            true
        }
    }

    /// Replace the whole selection with `records`.
    ///
    /// The new set is built aside and swapped in, so a reader sees either the
    /// old selection or the new one. Later duplicates overwrite earlier ones.
    pub fn merge_many<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        let replacement: HashMap<RecordId, Record> = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        debug!(
            previous = self.entries.len(),
            selected = replacement.len(),
            "Replacing selection set"
        );
        self.entries = replacement;
    }

    /// Insert or refresh every record in `records`, keeping existing entries.
    pub fn add_all(&mut self, records: &[Record]) {
        for record in records {
            self.entries.insert(record.id.clone(), record.clone());
        }
    }

    /// Remove every record in `records`; ids not selected are ignored.
    pub fn remove_all(&mut self, records: &[Record]) {
        for record in records {
            self.entries.remove(&record.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Record {
        Record::new(id).with_field("title", format!("Record {id}"))
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut store = SelectionStore::new();
        let a = record("a");

        assert!(store.toggle(&a));
        assert!(store.is_selected(&a.id));
        assert!(!store.toggle(&a));
        assert!(!store.is_selected(&a.id));

        store.add_all(&[a.clone()]);
        store.toggle(&a);
        store.toggle(&a);
        assert!(store.is_selected(&a.id));
    }

    #[test]
    fn test_merge_many_replaces_existing_selection() {
        let mut store = SelectionStore::new();
        store.toggle(&record("a"));
        store.toggle(&record("b"));

        store.merge_many(vec![record("c")]);

        assert_eq!(store.ids(), vec![RecordId::from("c")]);
    }

    #[test]
    fn test_merge_many_last_duplicate_wins() {
        let mut store = SelectionStore::new();
        let stale = record("a");
        let fresh = Record::new("a").with_field("title", "Renamed");

        store.merge_many(vec![stale, fresh.clone()]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&fresh.id), Some(&fresh));
    }

    #[test]
    fn test_add_all_keeps_other_pages() {
        let mut store = SelectionStore::new();
        store.toggle(&record("p1"));

        store.add_all(&[record("p2-a"), record("p2-b")]);

        assert_eq!(store.len(), 3);
        assert!(store.is_selected(&RecordId::from("p1")));
    }

    #[test]
    fn test_remove_all_ignores_unselected() {
        let mut store = SelectionStore::new();
        store.add_all(&[record("a"), record("b")]);

        store.remove_all(&[record("b"), record("zzz")]);

        assert_eq!(store.ids(), vec![RecordId::from("a")]);
    }

    #[test]
    fn test_add_all_refreshes_snapshot() {
        let mut store = SelectionStore::new();
        store.toggle(&record("a"));
        let refreshed = Record::new("a").with_field("title", "Refetched");

        store.add_all(&[refreshed.clone()]);

        assert_eq!(store.get(&refreshed.id), Some(&refreshed));
    }
}
