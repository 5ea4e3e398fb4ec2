mod roster_config;

pub use roster_config::{RosterConfig, DATA_FILE_ENV, UNDO_FIDELITY_ENV};
