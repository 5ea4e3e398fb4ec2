//! RecordStore - ordered, in-memory collection of player records.

use crate::player::{PlayerId, PlayerRecord};

/// Ordered player collection. Insertion order is preserved; removal splices
/// the record out without disturbing the order of the rest.
///
/// Uniqueness of ids is the caller's responsibility: `insert` never checks.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<PlayerRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `records` in the given order.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        RecordStore { records }
    }

    /// Append a record at the tail.
    pub fn insert(&mut self, record: PlayerRecord) {
        self.records.push(record);
    }

    pub fn find(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.find(id).is_some()
    }

    /// Overwrite name, country, role and team of the first record with `id`.
    /// Returns false if no such record exists.
    pub fn update(
        &mut self,
        id: PlayerId,
        name: &str,
        country: &str,
        role: &str,
        team: &str,
    ) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return false;
        };

        record.name = name.to_string();
        record.country = country.to_string();
        record.role = role.to_string();
        record.team = team.to_string();
        true
    }

    /// Splice out the first record with `id`, returning it.
    pub fn remove(&mut self, id: PlayerId) -> Option<PlayerRecord> {
        let position = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(position))
    }

    /// Materialize the current list, in order, for persistence.
    pub fn snapshot(&self) -> Vec<PlayerRecord> {
        self.records.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        for (i, name) in names.iter().enumerate() {
            store.insert(PlayerRecord::new(i as u64 + 1, *name, "IN", "Bat", "X"));
        }
        store
    }

    fn ids(store: &RecordStore) -> Vec<PlayerId> {
        store.iter().map(|record| record.id).collect()
    }

    #[test]
    fn new() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn insert_appends_at_tail() {
        let mut store = store_with(&["A", "B"]);
        store.insert(PlayerRecord::name_only(9, "Z"));
        assert_eq!(ids(&store), vec![1, 2, 9]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn find_returns_first_match() {
        let mut store = store_with(&["A"]);
        store.insert(PlayerRecord::name_only(1, "Duplicate"));
        assert_eq!(store.find(1).unwrap().name, "A");
        assert!(store.find(42).is_none());
    }

    #[test]
    fn update_overwrites_all_fields() {
        let mut store = store_with(&["A", "B"]);
        assert!(store.update(2, "Bee", "AU", "Bowl", "Y"));

        let record = store.find(2).unwrap();
        assert_eq!(record, &PlayerRecord::new(2, "Bee", "AU", "Bowl", "Y"));
    }

    #[test]
    fn update_missing_is_noop() {
        let mut store = store_with(&["A"]);
        assert!(!store.update(5, "X", "X", "X", "X"));
        assert_eq!(store.snapshot(), store_with(&["A"]).snapshot());
    }

    #[test]
    fn remove_splices_and_keeps_order() {
        let mut store = store_with(&["A", "B", "C"]);

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(ids(&store), vec![1, 3]);

        let head = store.remove(1).unwrap();
        assert_eq!(head.name, "A");
        assert_eq!(ids(&store), vec![3]);
    }

    #[test]
    fn remove_missing_returns_none() {
        let mut store = store_with(&["A"]);
        assert!(store.remove(7).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshot_preserves_order() {
        let records = vec![
            PlayerRecord::name_only(3, "C"),
            PlayerRecord::name_only(1, "A"),
        ];
        let store = RecordStore::from_records(records.clone());
        assert_eq!(store.snapshot(), records);
    }
}
