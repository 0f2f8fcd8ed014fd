//! # Key File Locking
//!
//! Serializes first-run key creation between processes sharing one key file.
//!
//! ## Security Purpose
//!
//! Without locking, two processes that both find no key will each generate
//! one and the second write silently replaces the first. Callers would then
//! hold keys whose persisted counterparts differ.
//!
//! ## Implementation
//!
//! Uses `fs2` for cross-platform file locking (flock on Unix, LockFile on
//! Windows) on a sidecar `<key>.lock` file. The sidecar is left in place on
//! release: unlinking it would let a waiter lock an orphaned inode.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::domain::errors::KeyStoreError;

/// Exclusive lock guarding a key file.
///
/// Released on drop (RAII).
pub struct KeyFileLock {
    /// The lock file handle (kept open to maintain lock)
    file: File,
    /// Path to the lock file
    path: PathBuf,
}

impl KeyFileLock {
    /// Lock file suffix
    const SUFFIX: &'static str = ".lock";

    /// Sidecar lock path for a key file.
    pub fn lock_path(key_path: &Path) -> PathBuf {
        let mut name = OsString::from(key_path.as_os_str());
        name.push(Self::SUFFIX);
        PathBuf::from(name)
    }

    /// Block until an exclusive lock on `key_path` is held.
    ///
    /// # Errors
    ///
    /// Returns `KeyStoreError::Lock` if the lock file cannot be opened or locked.
    pub fn acquire(key_path: &Path) -> Result<Self, KeyStoreError> {
        let path = Self::lock_path(key_path);
        let lock_err = |source| KeyStoreError::Lock {
            path: path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(lock_err)?;

        file.lock_exclusive().map_err(lock_err)?;
        debug!(path = %path.display(), "Acquired key file lock");

        Ok(Self { file, path })
    }

    /// Get the path to the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for KeyFileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_path_appends_suffix() {
        assert_eq!(
            KeyFileLock::lock_path(Path::new("dir/key.pem")),
            PathBuf::from("dir/key.pem.lock")
        );
    }

    #[test]
    fn test_acquire_creates_lock_file() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("key.pem");

        let lock = KeyFileLock::acquire(&key_path).expect("Should acquire lock");
        assert!(lock.path().exists());
        assert!(!key_path.exists());
    }

    #[test]
    fn test_second_holder_is_excluded_until_release() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("key.pem");

        let lock = KeyFileLock::acquire(&key_path).unwrap();

        let other = File::open(KeyFileLock::lock_path(&key_path)).unwrap();
        assert!(other.try_lock_exclusive().is_err());

        drop(lock);
        assert!(other.try_lock_exclusive().is_ok());
        FileExt::unlock(&other).unwrap();
    }

    #[test]
    fn test_reacquire_after_drop() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("key.pem");

        drop(KeyFileLock::acquire(&key_path).unwrap());
        assert!(KeyFileLock::acquire(&key_path).is_ok());
    }
}
