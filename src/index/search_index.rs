use std::collections::{BTreeMap, HashMap};

use crate::player::PlayerId;

/// Id → name lookup kept in lock-step with the record store.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    names: HashMap<PlayerId, String>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the name for `id`.
    pub fn put(&mut self, id: PlayerId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Drop the entry for `id`, returning the name it held.
    pub fn remove(&mut self, id: PlayerId) -> Option<String> {
        self.names.remove(&id)
    }

    pub fn get(&self, id: PlayerId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.names.contains_key(&id)
    }

    /// Case-insensitive substring search over names, ordered by id.
    pub fn search(&self, keyword: &str) -> BTreeMap<PlayerId, String> {
        let needle = keyword.to_lowercase();
        self.names
            .iter()
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .map(|(id, name)| (*id, name.clone()))
            .collect()
    }

    /// Indexed ids in ascending order.
    pub fn ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.names.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites() {
        let mut index = SearchIndex::new();
        index.put(1, "John");
        index.put(1, "Johnny");
        assert_eq!(index.get(1), Some("Johnny"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut index = SearchIndex::new();
        index.put(1, "John");
        assert_eq!(index.remove(2), None);
        assert_eq!(index.remove(1).as_deref(), Some("John"));
        assert!(index.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut index = SearchIndex::new();
        index.put(1, "John Smith");
        index.put(2, "Ravi");

        let hits = index.search("smi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.get(&1).map(String::as_str), Some("John Smith"));

        assert_eq!(index.search("RAV").keys().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn search_empty_keyword_matches_everything() {
        let mut index = SearchIndex::new();
        index.put(3, "C");
        index.put(1, "A");
        assert_eq!(index.search("").keys().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn search_without_hits() {
        let mut index = SearchIndex::new();
        index.put(1, "John");
        assert!(index.search("zzz").is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn ids_sorted() {
        let mut index = SearchIndex::new();
        index.put(5, "E");
        index.put(2, "B");
        index.put(9, "I");
        assert_eq!(index.ids(), vec![2, 5, 9]);
    }
}
