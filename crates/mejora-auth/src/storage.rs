//! Key-value backends for the persisted session entries.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::error::AuthError;

/// Minimal string key-value store the session lives in.
pub trait SessionStorage: Send + Sync {
    /// Read an entry. Unreadable or blank entries are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write an entry.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the backend cannot persist the value.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove an entry. Removing a missing entry succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the entry exists but cannot be removed.
    fn remove(&self, key: &str) -> Result<(), AuthError>;

    /// Short label for status display (`"file"`, `"memory"`, `"none"`).
    fn describe(&self) -> &'static str;
}

// --- File ---

/// One file per entry inside a private directory (`0700` dir, `0600` files).
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key))
            .ok()
            .filter(|s| !s.trim().is_empty())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AuthError::StoreError(format!("mkdir {}: {e}", self.dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        let path = self.entry_path(key);
        fs::write(&path, value)
            .map_err(|e| AuthError::StoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::StoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::StoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn describe(&self) -> &'static str {
        "file"
    }
}

// --- Memory ---

/// In-process storage, used by tests and by embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw entries, bypassing any serialization.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .filter(|s| !s.trim().is_empty())
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }

    fn describe(&self) -> &'static str {
        "memory"
    }
}

// --- None ---

/// Stand-in when no storage location exists (no home directory, sandboxed
/// embedders). Reads see nothing and removals are no-ops.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStorage;

impl SessionStorage for NoStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), AuthError> {
        Err(AuthError::StorageUnavailable(format!(
            "cannot persist '{key}': no session directory"
        )))
    }

    fn remove(&self, _key: &str) -> Result<(), AuthError> {
        Ok(())
    }

    fn describe(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_set_get_remove_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path().join("session"));

        storage.set("token", "abc").expect("set");
        assert_eq!(storage.get("token").as_deref(), Some("abc"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(tmp.path().join("session").join("token"))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "token file should be 0600");
        }

        storage.remove("token").expect("remove");
        assert!(storage.get("token").is_none());
    }

    #[test]
    fn file_get_ignores_blank_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        std::fs::write(tmp.path().join("token"), "   \n").expect("write");
        let storage = FileStorage::new(tmp.path().to_path_buf());
        assert!(storage.get("token").is_none());
    }

    #[test]
    fn file_remove_missing_entry_succeeds() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path().join("never-created"));
        assert!(storage.remove("user").is_ok());
    }

    #[test]
    fn no_storage_never_throws_on_remove() {
        assert!(NoStorage.remove("token").is_ok());
        assert!(NoStorage.get("token").is_none());
        assert!(matches!(
            NoStorage.set("token", "abc"),
            Err(AuthError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn memory_seeded_entries_are_readable() {
        let storage = MemoryStorage::with_entries([("token", "abc"), ("user", "")]);
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
        assert!(storage.get("user").is_none(), "blank entries read as absent");
    }
}
