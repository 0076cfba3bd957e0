//! Directory snapshot storage
//!
//! Stores the directory snapshot as one JSON document on disk. Writes go
//! through [`DirectoryStore::mutate`], which holds a single-writer lock
//! across the load-compute-persist cycle so racing mutations serialize
//! instead of losing updates. Reads never take the lock.

use std::path::PathBuf;

use parking_lot::Mutex;

use crate::db::Snapshot;

/// Snapshot file name inside the database directory
pub const STORE_FILE: &str = "directory.json";

/// Storage errors (fatal for the requesting operation)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Single-file snapshot store
#[derive(Debug)]
pub struct DirectoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DirectoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load the current snapshot
    ///
    /// A store file that does not exist yet reads as the empty snapshot;
    /// any other failure is surfaced.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically apply a mutation: load, compute, persist
    ///
    /// The closure may refuse the mutation by returning an error, in which
    /// case nothing is persisted and the prior snapshot stays intact.
    pub fn mutate<T, E>(&self, f: impl FnOnce(&mut Snapshot) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock();
        let mut snapshot = self.load()?;
        let value = f(&mut snapshot)?;
        self.persist(&snapshot)?;
        Ok(value)
    }

    /// Replace the snapshot on disk
    ///
    /// Writes a sibling temp file first and renames it into place, so a
    /// crash mid-write leaves the prior snapshot readable.
    fn persist(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(snapshot)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
