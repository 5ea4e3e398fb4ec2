use crate::player::{PlayerId, PlayerRecord};

/// The inverse of one successful roster mutation.
///
/// `previous` is the state captured just before the mutation; how much of the
/// record it carries depends on the [`UndoFidelity`](super::UndoFidelity) in
/// effect when the action was recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoAction {
    /// Reverted by removing the player.
    Add { id: PlayerId },
    /// Reverted by writing `previous` back over the player.
    Edit { id: PlayerId, previous: PlayerRecord },
    /// Reverted by appending `previous` to the roster again.
    Delete { id: PlayerId, previous: PlayerRecord },
}

impl UndoAction {
    pub fn id(&self) -> PlayerId {
        match self {
            UndoAction::Add { id }
            | UndoAction::Edit { id, .. }
            | UndoAction::Delete { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UndoAction::Add { .. } => "add",
            UndoAction::Edit { .. } => "edit",
            UndoAction::Delete { .. } => "delete",
        }
    }
}
