mod action;
mod fidelity;
mod log;

pub use action::UndoAction;
pub use fidelity::{ParseUndoFidelityError, UndoFidelity};
pub use log::UndoLog;
