//! RosterService - keeps the record store, search index and undo log in step
//! and writes the full roster through a [`PlayerStore`] after every change.
//!
//! Every mutation follows the same order: record store, search index, undo
//! log, save. Edits and deletes of unknown ids change nothing and save
//! nothing.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::index::SearchIndex;
use crate::persistence::{PersistenceError, PlayerStore};
use crate::player::{PlayerId, PlayerRecord};
use crate::store::RecordStore;
use crate::undo::{UndoAction, UndoFidelity, UndoLog};

pub struct RosterService<S: PlayerStore> {
    backend: S,
    records: RecordStore,
    index: SearchIndex,
    undo: UndoLog,
    fidelity: UndoFidelity,
    next_id: PlayerId,
}

impl<S: PlayerStore> RosterService<S> {
    /// Load the roster from `backend` and rebuild the in-memory structures.
    pub fn open(backend: S, fidelity: UndoFidelity) -> Result<Self, PersistenceError> {
        let mut index = SearchIndex::new();
        let mut loaded = Vec::new();
        for record in backend.load()? {
            // First occurrence of an id wins; the store holds one record per id.
            if index.contains(record.id) {
                warn!(id = record.id, name = %record.name, "dropping player with duplicate id");
                continue;
            }
            index.put(record.id, record.name.clone());
            loaded.push(record);
        }

        // A file with gaps (ids deleted in an earlier session) must not hand
        // out an id that is still in use.
        let highest = loaded.iter().map(|record| record.id).max().unwrap_or(0);
        let next_id = highest.max(loaded.len() as PlayerId) + 1;

        info!(players = loaded.len(), next_id, %fidelity, "roster opened");

        Ok(RosterService {
            backend,
            records: RecordStore::from_records(loaded),
            index,
            undo: UndoLog::new(),
            fidelity,
            next_id,
        })
    }

    /// Add a player under a fresh id and return that id.
    pub fn add(
        &mut self,
        name: &str,
        country: &str,
        role: &str,
        team: &str,
    ) -> Result<PlayerId, PersistenceError> {
        let id = self.next_id;
        self.next_id += 1;

        self.records
            .insert(PlayerRecord::new(id, name, country, role, team));
        self.index.put(id, name);
        self.undo.push(UndoAction::Add { id });

        info!(id, name, "player added");
        self.persist()?;
        Ok(id)
    }

    /// Overwrite a player's fields. Returns false, touching nothing, when `id`
    /// is not on the roster.
    pub fn edit(
        &mut self,
        id: PlayerId,
        name: &str,
        country: &str,
        role: &str,
        team: &str,
    ) -> Result<bool, PersistenceError> {
        let Some(old_name) = self.index.get(id).map(str::to_owned) else {
            info!(id, "edit skipped, player not found");
            return Ok(false);
        };

        let mut previous = self
            .records
            .find(id)
            .map(|record| self.fidelity.capture(record))
            .unwrap_or_else(|| PlayerRecord::name_only(id, ""));
        previous.name = old_name;

        self.records.update(id, name, country, role, team);
        self.index.put(id, name);
        self.undo.push(UndoAction::Edit { id, previous });

        info!(id, name, "player updated");
        self.persist()?;
        Ok(true)
    }

    /// Remove a player, returning the removed record, or `None` when `id` is
    /// not on the roster.
    pub fn delete(&mut self, id: PlayerId) -> Result<Option<PlayerRecord>, PersistenceError> {
        let Some(removed) = self.records.remove(id) else {
            info!(id, "delete skipped, player not found");
            return Ok(None);
        };

        self.index.remove(id);
        self.undo.push(UndoAction::Delete {
            id,
            previous: self.fidelity.capture(&removed),
        });

        info!(id, name = %removed.name, "player deleted");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Revert the most recent mutation and return what was reverted, or
    /// `None` when there is nothing to undo. An undo cannot itself be undone.
    pub fn undo(&mut self) -> Result<Option<UndoAction>, PersistenceError> {
        let Some(action) = self.undo.pop() else {
            info!("nothing to undo");
            return Ok(None);
        };

        match &action {
            UndoAction::Add { id } => {
                self.records.remove(*id);
                self.index.remove(*id);
            }
            UndoAction::Edit { id, previous } => {
                self.records.update(
                    *id,
                    &previous.name,
                    &previous.country,
                    &previous.role,
                    &previous.team,
                );
                self.index.put(*id, previous.name.clone());
            }
            UndoAction::Delete { id, previous } => {
                self.records.insert(previous.clone());
                self.index.put(*id, previous.name.clone());
            }
        }

        info!(id = action.id(), kind = action.kind(), "undone");
        self.persist()?;
        Ok(Some(action))
    }

    /// Players whose name contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> BTreeMap<PlayerId, String> {
        self.index.search(keyword)
    }

    pub fn get(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.records.find(id)
    }

    /// The current roster in list order.
    pub fn players(&self) -> Vec<PlayerRecord> {
        self.records.snapshot()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> PlayerId {
        self.next_id
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        let snapshot = self.records.snapshot();
        self.backend.save(&snapshot)?;
        debug!(players = snapshot.len(), "roster saved");
        Ok(())
    }
}
