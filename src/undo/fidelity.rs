use std::fmt;
use std::str::FromStr;

use crate::player::PlayerRecord;

/// How much of a player's prior state an edit/delete undo entry keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UndoFidelity {
    /// Keep only the name. Undo restores the name and blanks country, role
    /// and team.
    #[default]
    NameOnly,
    /// Keep the whole record. Undo restores every field.
    #[value(name = "full")]
    FullRecord,
}

impl UndoFidelity {
    /// Capture `record` as an undo snapshot under this fidelity.
    pub fn capture(self, record: &PlayerRecord) -> PlayerRecord {
        match self {
            UndoFidelity::NameOnly => PlayerRecord::name_only(record.id, record.name.clone()),
            UndoFidelity::FullRecord => record.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown undo fidelity '{0}' (expected 'name-only' or 'full')")]
pub struct ParseUndoFidelityError(String);

impl FromStr for UndoFidelity {
    type Err = ParseUndoFidelityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name-only" | "name_only" | "name" => Ok(UndoFidelity::NameOnly),
            "full" | "full-record" | "full_record" => Ok(UndoFidelity::FullRecord),
            other => Err(ParseUndoFidelityError(other.to_string())),
        }
    }
}

impl fmt::Display for UndoFidelity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoFidelity::NameOnly => f.write_str("name-only"),
            UndoFidelity::FullRecord => f.write_str("full"),
        }
    }
}
