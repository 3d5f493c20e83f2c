use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{KeyValueStore, StorageError, StorageKey};

/// Typed load/save for one storage key, JSON-encoded.
///
/// `load` and `save` never fail: a corrupt or unreadable entry loads as
/// `None`, and a failed write is logged while the caller's in-memory state
/// stays as it is.
pub struct Durable<T> {
    storage: Arc<dyn KeyValueStore>,
    key: StorageKey,
    _value: PhantomData<fn() -> T>,
}

impl<T> Durable<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(storage: Arc<dyn KeyValueStore>, key: StorageKey) -> Self {
        Self {
            storage,
            key,
            _value: PhantomData,
        }
    }

    pub fn try_load(&self) -> Result<Option<T>, StorageError> {
        let Some(text) = self.storage.get(self.key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&text).map_err(|e| StorageError::Decode {
            key: self.key,
            source: e,
        })?;
        Ok(Some(value))
    }

    pub fn load(&self) -> Option<T> {
        match self.try_load() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring stored '{}': {}", self.key, e);
                None
            }
        }
    }

    pub fn try_save(&self, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value).map_err(|e| StorageError::Encode {
            key: self.key,
            source: e,
        })?;
        self.storage.set(self.key, &text)
    }

    pub fn save(&self, value: &T) {
        if let Err(e) = self.try_save(value) {
            tracing::error!("Failed to save '{}': {}", self.key, e);
        }
    }
}
