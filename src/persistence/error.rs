//! Error types raised by persistence backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
