//! Durable storage for the account store

use std::path::{Path, PathBuf};

use crate::error::PlannerResult;

use super::file_io::{read_json, write_json_atomic};
use super::store::AccountStore;

/// Reads and writes the account store at a fixed path
pub struct PersistenceGateway {
    path: PathBuf,
}

impl PersistenceGateway {
    /// Create a gateway backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this gateway reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the account store from disk
    ///
    /// A missing file is a normal first run and yields an empty store. A
    /// file that exists but cannot be parsed is reported as
    /// [`crate::error::PlannerError::CorruptStore`]; the caller decides
    /// whether to abort or start empty.
    pub fn load(&self) -> PlannerResult<AccountStore> {
        let mut store: AccountStore = read_json(&self.path)?.unwrap_or_default();
        // Persisted spent figures are caches; rebuild them before anything
        // reads the store.
        store.refresh_caches();
        Ok(store)
    }

    /// Write the whole account store (every account, active or not) to disk
    /// atomically
    pub fn save(&self, store: &AccountStore) -> PlannerResult<()> {
        write_json_atomic(&self.path, store)
    }
}
