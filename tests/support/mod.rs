#![allow(dead_code)]

use cricket_roster::{
    InMemoryPlayerStore, JsonFileStore, PlayerId, PlayerStore, RosterService, UndoFidelity,
};
use std::path::Path;

pub fn memory_roster() -> RosterService<InMemoryPlayerStore> {
    RosterService::open(InMemoryPlayerStore::new(), UndoFidelity::NameOnly).unwrap()
}

pub fn file_roster(path: &Path) -> RosterService<JsonFileStore> {
    RosterService::open(JsonFileStore::new(path), UndoFidelity::NameOnly).unwrap()
}

/// Ids in the record store, sorted.
pub fn record_ids<S: PlayerStore>(roster: &RosterService<S>) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = roster.records().iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids
}

/// The search index and the record store hold exactly the same ids, and every
/// indexed name matches the record's name.
pub fn assert_consistent<S: PlayerStore>(roster: &RosterService<S>) {
    assert_eq!(record_ids(roster), roster.index().ids());
    for record in roster.records().iter() {
        assert_eq!(roster.index().get(record.id), Some(record.name.as_str()));
    }
}
