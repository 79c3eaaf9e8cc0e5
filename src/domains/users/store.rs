//! File-backed record store.
//!
//! The store owns a single JSON file holding the entire dataset as one array.
//! Every operation re-reads the file, so the file is the sole source of truth.
//!
//! ## Concurrency
//!
//! Appends are serialized through a per-store `tokio::sync::Mutex`, so id
//! assignment always works from a consistent view and concurrent appends
//! cannot lose updates. Reads take no lock: writes go to a temporary file in
//! the same directory and are renamed into place, so a reader sees either the
//! old array or the new one, never a truncated file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use super::error::StoreError;
use super::record::{NewUser, UserRecord};

/// Durable mapping from id to [`UserRecord`], backed by a single JSON file.
pub struct RecordStore {
    /// Path of the backing JSON file.
    path: PathBuf,

    /// Single-writer lock: one in-flight mutation at a time.
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Create a store over the given backing file.
    ///
    /// The file is not touched here; a missing file is treated as an empty
    /// store until the first append creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the entire dataset.
    ///
    /// A missing backing file is an empty store. A file that exists but does
    /// not parse as a JSON array of records is a [`StoreError::Corrupt`]; the
    /// file is left untouched.
    pub async fn load_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.read_records()
    }

    /// Append a new record, assigning it the next id.
    ///
    /// The id is `current record count + 1`, computed under the writer lock so
    /// concurrent appends each observe the other's commit. The whole array is
    /// rewritten pretty-printed through a temporary file and an atomic rename.
    #[instrument(skip_all, fields(store = %self.path.display()))]
    pub async fn append(&self, new_user: NewUser) -> Result<u64, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records()?;
        let id = records.len() as u64 + 1;
        records.push(new_user.into_record(id));
        self.write_records(&records)?;

        info!("Appended user record with id {}", id);
        Ok(id)
    }

    /// Look up a record by id. A miss is `Ok(None)`, never an error.
    pub async fn find_by_id(&self, id: u64) -> Result<Option<UserRecord>, StoreError> {
        let records = self.read_records()?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    /// Number of records currently in the store.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read_records()?.len())
    }

    fn read_records(&self) -> Result<Vec<UserRecord>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file {} missing, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    /// Write the full array to a temp file in the store's directory, then
    /// rename it over the backing file.
    fn write_records(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(StoreError::Serialize)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        Ok(())
    }
}
