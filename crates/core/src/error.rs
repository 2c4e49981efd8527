//! Error taxonomy for the cart container.
//!
//! There is no recovery tier: every variant is surfaced to the caller,
//! never retried, never swallowed. A storage failure during a mutation
//! leaves the in-memory cart updated (memory is authoritative, storage is
//! a mirror) and tells the caller the mirror is stale.

use thiserror::Error;

/// Storage collaborator failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure reading or writing a blob
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    /// Key not usable by this backend (file backends reject path-like keys)
    #[error("invalid storage key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Why the backend rejected it
        reason: String,
    },
}

/// Errors surfaced by the cart container and its accessor.
#[derive(Debug, Error)]
pub enum CartError {
    /// Accessor called with no active cart scope on this thread
    #[error("cart accessor used outside an active cart scope")]
    NotInProviderScope,

    /// Storage read or write failed
    #[error("storage failure")]
    Storage(#[from] StorageError),

    /// The persisted blob could not be decoded at load time
    #[error("malformed cart blob in storage")]
    Deserialize(#[source] serde_json::Error),

    /// The in-memory cart could not be encoded for persistence
    #[error("cart snapshot could not be serialized")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_converts_into_cart_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CartError = StorageError::from(io).into();
        assert!(matches!(err, CartError::Storage(StorageError::Io(_))));
    }

    #[test]
    fn test_error_messages_name_the_failure() {
        assert_eq!(
            CartError::NotInProviderScope.to_string(),
            "cart accessor used outside an active cart scope"
        );

        let err = StorageError::InvalidKey {
            key: "a/b".to_string(),
            reason: "path separator".to_string(),
        };
        assert!(err.to_string().contains("a/b"));
    }
}
