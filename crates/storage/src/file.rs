//! File-backed storage adapter.
//!
//! One file per key under a base directory. Writes land in a temp file in
//! the same directory and are renamed into place, so a crash mid-write
//! never leaves a torn blob behind: readers see either the old value or
//! the new one.

use std::fs;
use std::io;
use std::path::PathBuf;

use cartstore_core::{CartStorage, StorageError};
use tracing::debug;

/// File-backed storage: `<base>/<key>.json` per key.
///
/// Keys are validated before touching the filesystem; path separators,
/// `..`, NUL and control characters are rejected so a key can never
/// escape the base directory.
#[derive(Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `base`, creating the directory if needed.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let reject = |reason: &str| {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        })
    };
    if key.is_empty() {
        return reject("key cannot be empty");
    }
    if key.contains('/') || key.contains('\\') {
        return reject("key contains a path separator");
    }
    if key.contains("..") {
        return reject("key contains a parent-directory component");
    }
    if key.chars().any(|c| c == '\0' || c.is_control()) {
        return reject("key contains control characters");
    }
    Ok(())
}

impl CartStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(
            target: "cartstore::storage",
            key,
            bytes = value.len(),
            "wrote blob"
        );
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
