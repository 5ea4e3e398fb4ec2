//! File-based player store.
//!
//! The roster lives in a single JSON file holding an array of objects:
//! ```text
//! [
//!     {
//!         "Player ID": 1,
//!         "Name": "...",
//!         "Country": "...",
//!         "Role": "...",
//!         "Team": "..."
//!     }
//! ]
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::player::PlayerRecord;

use super::{PersistenceError, PlayerStore};

const INDENT: &[u8] = b"    ";

/// JSON-file implementation of [`PlayerStore`].
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<(), PersistenceError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Render records as a pretty-printed array with four-space indentation.
pub(crate) fn to_pretty_json(records: &[PlayerRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

impl PlayerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<PlayerRecord>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<PlayerRecord>>(&bytes) {
            Ok(records) => {
                debug!(path = %self.path.display(), count = records.len(), "loaded players");
                Ok(records)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file unparsable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[PlayerRecord]) -> Result<(), PersistenceError> {
        self.ensure_parent()?;

        let json = to_pretty_json(records)?;
        let mut file = fs::File::create(&self.path)?;
        file.write_all(&json)?;
        file.flush()?;

        debug!(path = %self.path.display(), count = records.len(), "saved players");
        Ok(())
    }
}
