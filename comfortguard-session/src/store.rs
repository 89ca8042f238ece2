//! Session files on disk
//!
//! Thin wrappers over [`SessionState::to_json`] and
//! [`SessionState::from_json`]. The file is written in one call; a failed
//! load returns an error and leaves any existing state alone.

use std::fs;
use std::path::Path;

use crate::errors::{SessionError, SessionResult};
use crate::session::SessionState;

/// Write `state` to `path` as pretty-printed JSON
pub fn save(path: impl AsRef<Path>, state: &SessionState) -> SessionResult<()> {
    let path = path.as_ref();
    let json = state.to_json()?;
    fs::write(path, json).map_err(|e| io_error(path, e))?;
    log::info!(
        "saved session to {} ({} samples)",
        path.display(),
        state.monitor.history().len()
    );
    Ok(())
}

/// Read a session from `path`
pub fn load(path: impl AsRef<Path>) -> SessionResult<SessionState> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let state = SessionState::from_json(&json)?;
    log::info!(
        "loaded session from {} ({} samples)",
        path.display(),
        state.monitor.history().len()
    );
    Ok(state)
}

fn io_error(path: &Path, err: std::io::Error) -> SessionError {
    SessionError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
