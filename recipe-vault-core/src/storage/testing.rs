use super::{KeyValueStore, MemoryStorage, StorageError, StorageKey};

/// Storage whose writes always fail, as when quota is exhausted.
#[derive(Debug, Default)]
pub struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl ReadOnlyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry, bypassing the write failure.
    pub fn with_entry(self, key: StorageKey, value: &str) -> Self {
        self.inner
            .set(key, value)
            .expect("memory storage accepts writes");
        self
    }
}

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: StorageKey, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&self, _key: StorageKey) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}
