//! Durable key-value storage for the stores.
//!
//! Each store owns exactly one [`StorageKey`]. Backends only move strings;
//! [`Durable`] adds the JSON encoding and the best-effort error policy.

mod durable;
mod error;
mod file;
mod key;
mod memory;
#[cfg(test)]
pub(crate) mod testing;

pub use durable::Durable;
pub use error::StorageError;
pub use file::FileStorage;
pub use key::StorageKey;
pub use memory::MemoryStorage;

/// A synchronous string-keyed storage backend.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under the key.
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: StorageKey) -> Result<(), StorageError>;
}
