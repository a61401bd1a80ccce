//! Session persistence.
//!
//! The session owner writes through a [`SessionStore`] it receives at
//! construction, so the storage mechanism stays swappable: a file on disk
//! for real clients, memory for tests and embedders that opt out of
//! persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use crate::session::SessionRecord;

/// File name shared with the web client's stored record.
const STORAGE_FILE: &str = "auth-storage.json";

/// Environment variable overriding the session file location.
pub const SESSION_FILE_ENV: &str = "HOMETRACKER_SESSION_FILE";

/// Errors from reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session record is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable storage for the single session record.
pub trait SessionStore: Send + Sync {
    /// Persist the record, replacing any previous one.
    fn save(&self, record: &SessionRecord) -> Result<(), StoreError>;

    /// Load the persisted record, `None` when nothing is stored.
    fn load(&self) -> Result<Option<SessionRecord>, StoreError>;

    /// Remove the persisted record. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Shared handles delegate, so one store can back several owners.
impl<T: SessionStore + ?Sized> SessionStore for std::sync::Arc<T> {
    fn save(&self, record: &SessionRecord) -> Result<(), StoreError> {
        (**self).save(record)
    }

    fn load(&self) -> Result<Option<SessionRecord>, StoreError> {
        (**self).load()
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Session record stored as a JSON file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStore { path: path.into() }
    }

    /// Default session file location.
    ///
    /// `HOMETRACKER_SESSION_FILE` wins when set and non-empty, otherwise the
    /// platform data directory is used, e.g.
    /// `~/.local/share/hometracker/auth-storage.json` on Linux.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(SESSION_FILE_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hometracker")
            .join(STORAGE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        FileSessionStore::new(Self::default_path())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, record: &SessionRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionRecord>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and embedders without persistence.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stored record, if any.
    pub fn snapshot(&self) -> Option<SessionRecord> {
        self.record.lock().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, record: &SessionRecord) -> Result<(), StoreError> {
        *self.record.lock() = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.record.lock().clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.record.lock() = None;
        Ok(())
    }
}
