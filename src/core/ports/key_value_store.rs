//! Key-value store port
//!
//! Defines the string-keyed store snapshots are persisted into, in the
//! spirit of browser local storage.

use thiserror::Error;

/// Errors raised by a key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be read or written
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The write would exceed the store's size limit
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        /// Size the store would have after the write
        needed: u64,
        /// Configured limit
        quota: u64,
    },
}

/// String-keyed, string-valued durable store
///
/// Implementations handle where the values physically live (memory, a JSON
/// file, ...). A `set` overwrites any prior value; there is no transaction or
/// partial-write protection.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
