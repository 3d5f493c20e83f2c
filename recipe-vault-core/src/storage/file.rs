//! File-backed storage: one file per key under a data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError, StorageKey};

/// Storage that keeps each entry in its own file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: StorageKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }

    pub fn exists(&self, key: StorageKey) -> bool {
        self.path(key).exists()
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    /// Creates the data directory if it doesn't exist.
    fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::Io {
            path: self.data_dir.clone(),
            source: e,
        })?;

        let path = self.path(key);
        fs::write(&path, value).map_err(|e| StorageError::Io { path, source: e })
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let path = self.path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }
}
