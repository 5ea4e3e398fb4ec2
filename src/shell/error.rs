use thiserror::Error;

use crate::persistence::PersistenceError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input line was not valid UTF-8")]
    InvalidUtf8,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("failed to render players: {0}")]
    Render(#[from] serde_json::Error),
}
