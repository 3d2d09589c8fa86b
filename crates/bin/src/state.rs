//! State file handling for the CLI.
//!
//! Every command loads the store from the state file, runs against it, and
//! saves it back after mutations. A corrupt state file is replaced by a
//! fresh store with a warning, never a crash.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use qrlink::store::InMemory;

/// Handle to the on-disk store state.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the store, falling back to a fresh one on failure.
    pub fn open(&self) -> Arc<InMemory> {
        match InMemory::load_from_file(&self.path) {
            Ok(store) => {
                tracing::debug!(path = %self.path.display(), "loaded state file");
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "failed to load state file: {e}. Starting fresh."
                );
                Arc::new(InMemory::new())
            }
        }
    }

    /// Persist the store back to disk.
    pub fn save(&self, store: &InMemory) -> qrlink::Result<()> {
        store.save_to_file(&self.path)
    }
}
