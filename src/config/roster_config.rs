//! Roster configuration.

use std::env;
use std::path::PathBuf;

use crate::undo::UndoFidelity;

pub const DATA_FILE_ENV: &str = "CRICKET_ROSTER_FILE";
pub const UNDO_FIDELITY_ENV: &str = "CRICKET_ROSTER_UNDO";

const DEFAULT_DATA_FILE: &str = "cricket_players.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterConfig {
    /// JSON file the roster is loaded from and saved to.
    pub data_file: PathBuf,
    pub undo_fidelity: UndoFidelity,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            undo_fidelity: UndoFidelity::default(),
        }
    }
}

impl RosterConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CRICKET_ROSTER_FILE` - data file path (default: `cricket_players.json`)
    /// - `CRICKET_ROSTER_UNDO` - `name-only` or `full` (default: `name-only`)
    ///
    /// Unset, empty, or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_ENV).filter(|value| !value.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(fidelity) = lookup(UNDO_FIDELITY_ENV).and_then(|value| value.parse().ok()) {
            config.undo_fidelity = fidelity;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = RosterConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.data_file, PathBuf::from("cricket_players.json"));
        assert_eq!(config.undo_fidelity, UndoFidelity::NameOnly);
    }

    #[test]
    fn reads_overrides() {
        let config = RosterConfig::from_lookup(lookup(&[
            (DATA_FILE_ENV, "/tmp/roster.json"),
            (UNDO_FIDELITY_ENV, "full"),
        ]));
        assert_eq!(config.data_file, PathBuf::from("/tmp/roster.json"));
        assert_eq!(config.undo_fidelity, UndoFidelity::FullRecord);
    }

    #[test]
    fn ignores_bad_values() {
        let config = RosterConfig::from_lookup(lookup(&[
            (DATA_FILE_ENV, "  "),
            (UNDO_FIDELITY_ENV, "sometimes"),
        ]));
        assert_eq!(config, RosterConfig::default());
    }
}
