mod config;
mod index;
mod persistence;
mod player;
mod roster;
mod shell;
mod store;
mod undo;

pub use config::{RosterConfig, DATA_FILE_ENV, UNDO_FIDELITY_ENV};
pub use index::SearchIndex;
pub use persistence::{InMemoryPlayerStore, JsonFileStore, PersistenceError, PlayerStore};
pub use player::{PlayerId, PlayerRecord};
pub use roster::RosterService;
pub use shell::{MenuChoice, Shell, ShellError};
pub use store::RecordStore;
pub use undo::{ParseUndoFidelityError, UndoAction, UndoFidelity, UndoLog};
