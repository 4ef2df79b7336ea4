use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::io::lock::{LockError, StateLock};

pub const SESSION_FILE: &str = ".session.json";

/// The persisted lock flag (written to .session.json).
///
/// This is the caller-owned copy of the flag; the controller only
/// reports changes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub locked: bool,
    /// When the current lock session began
    #[serde(default)]
    pub locked_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Snapshot of a lock whose session began at `started_at` (if locked).
    pub fn snapshot(started_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        SessionState {
            locked: started_at.is_some(),
            locked_since: started_at,
            updated_at: Some(now),
        }
    }

    /// Drop a stray start time on an unlocked session.
    fn normalized(mut self) -> Self {
        if !self.locked {
            self.locked_since = None;
        }
        self
    }
}

/// Error type for session state writes
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize session state: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn session_path(dir: &Path) -> PathBuf {
    dir.join(SESSION_FILE)
}

/// Read .session.json. Missing or malformed files read as unlocked.
pub fn read_session(dir: &Path) -> SessionState {
    let path = session_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return SessionState::default(),
    };
    match serde_json::from_str::<SessionState>(&content) {
        Ok(state) => state.normalized(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed session file");
            SessionState::default()
        }
    }
}

/// Write .session.json atomically while holding the state lock.
pub fn write_session(dir: &Path, state: &SessionState) -> Result<(), StateError> {
    let path = session_path(dir);
    fs::create_dir_all(dir).map_err(|e| StateError::WriteError {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let content = serde_json::to_string_pretty(state)?;
    let _lock = StateLock::acquire_default(dir)?;
    atomic_write(&path, content.as_bytes()).map_err(|e| StateError::WriteError { path, source: e })
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
