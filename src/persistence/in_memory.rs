use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::player::PlayerRecord;

use super::{PersistenceError, PlayerStore};

/// In-memory player store backed by `Arc<RwLock<Vec>>`.
///
/// Clone-friendly (cloning shares the same underlying storage), so a test can
/// keep a handle and inspect what the roster saved.
#[derive(Clone, Default)]
pub struct InMemoryPlayerStore {
    records: Arc<RwLock<Vec<PlayerRecord>>>,
    saves: Arc<AtomicU64>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PlayerRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            saves: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn load(&self) -> Result<Vec<PlayerRecord>, PersistenceError> {
        let records = self
            .records
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("load"))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[PlayerRecord]) -> Result<(), PersistenceError> {
        let mut stored = self
            .records
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("save"))?;
        *stored = records.to_vec();
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let store = InMemoryPlayerStore::new();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_overwrites() {
        let store = InMemoryPlayerStore::with_records(vec![PlayerRecord::name_only(1, "A")]);
        store
            .save(&[
                PlayerRecord::name_only(2, "B"),
                PlayerRecord::name_only(3, "C"),
            ])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "B");
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn clone_shares_storage() {
        let store = InMemoryPlayerStore::new();
        let clone = store.clone();
        store.save(&[PlayerRecord::name_only(1, "A")]).unwrap();

        assert_eq!(clone.load().unwrap().len(), 1);
        assert_eq!(clone.save_count(), 1);
    }
}
