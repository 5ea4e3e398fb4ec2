use super::UndoAction;

/// Last-in-first-out log of undo entries. Grows without bound.
#[derive(Clone, Debug, Default)]
pub struct UndoLog {
    entries: Vec<UndoAction>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: UndoAction) {
        self.entries.push(action);
    }

    /// Remove and return the most recent entry, or `None` when there is
    /// nothing to undo.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
