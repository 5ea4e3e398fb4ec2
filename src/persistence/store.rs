use crate::player::PlayerRecord;

use super::PersistenceError;

/// Backing store for the full roster. Every save replaces what was there.
pub trait PlayerStore: Send + Sync {
    /// Load every stored record in order. A missing or unreadable dataset is
    /// reported as empty, not as an error.
    fn load(&self) -> Result<Vec<PlayerRecord>, PersistenceError>;

    /// Overwrite the stored dataset with `records`.
    fn save(&self, records: &[PlayerRecord]) -> Result<(), PersistenceError>;
}
