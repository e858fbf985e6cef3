//! Durable local state: which gist this installation syncs with.

use crate::core::path::{ensure_dir, state_file};
use crate::core::{CodesyncError, CodesyncResult};
use crate::di::StateStore;
use crate::sync::RemoteHandle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SyncState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gist_id: Option<RemoteHandle>,
}

/// `StateStore` backed by a small YAML file
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Store at the default location (`<codesync home>/state.yaml`)
    pub fn open_default() -> CodesyncResult<Self> {
        Ok(Self::new(state_file()?))
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> CodesyncResult<SyncState> {
        if !self.path.exists() {
            return Ok(SyncState::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SyncState::default());
        }
        serde_yaml::from_str(&content).map_err(|e| {
            CodesyncError::Config(format!(
                "Failed to parse state file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, state: &SyncState) -> CodesyncResult<()> {
        if let Some(dir) = self.path.parent() {
            ensure_dir(dir)?;
        }
        fs::write(&self.path, serde_yaml::to_string(state)?)?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn remote_handle(&self) -> CodesyncResult<Option<RemoteHandle>> {
        Ok(self.load()?.gist_id)
    }

    fn set_remote_handle(&self, handle: &RemoteHandle) -> CodesyncResult<()> {
        let mut state = self.load()?;
        state.gist_id = Some(handle.clone());
        self.save(&state)
    }
}
