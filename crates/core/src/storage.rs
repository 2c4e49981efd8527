//! Storage contract for the persisted cart blob.

use crate::error::StorageError;

/// Opaque key-value storage collaborator.
///
/// Values are opaque strings; the engine keeps one serialized cart blob
/// under a single namespaced key. Implementations live in
/// `cartstore-storage` (`MemoryStorage`, `FileStorage`).
///
/// # Contract
///
/// - `get` on an absent key is `Ok(None)`, never an error.
/// - `set` overwrites unconditionally; a returned `Ok` means the value is
///   durable to the extent the backend can promise.
/// - `clear` on an absent key is not an error.
pub trait CartStorage: Send + Sync {
    /// Read the value under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, overwriting any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`.
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}
