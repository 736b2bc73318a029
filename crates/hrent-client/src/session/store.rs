//! Durable storage for the bearer token.
//!
//! Provides a keyring-backed store using the platform's native credential
//! storage:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager
//!
//! plus a plain file store for machines without a keyring daemon and an
//! in-memory store for tests.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use keyring::Entry;
use tracing::{debug, warn};

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "hrent";

/// Keyring entry holding the bearer token.
const TOKEN_ENTRY: &str = "auth_token";

/// Error type for credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Failed to read or write the token file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for credential operations.
pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// Persistent storage for a single bearer token.
///
/// Implementations treat "nothing stored" as `Ok(None)` and clearing an
/// already-empty store as success.
pub trait TokenStore: Send + Sync {
    /// Loads the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> CredentialResult<Option<String>>;

    /// Replaces the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: &str) -> CredentialResult<()>;

    /// Removes the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear(&self) -> CredentialResult<()>;
}

/// Token store backed by the system keyring.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
    entry: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    /// Creates a store using the default service and entry names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            entry: TOKEN_ENTRY.to_string(),
        }
    }

    /// Uses a different entry name, e.g. to keep several profiles apart.
    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    fn entry(&self) -> CredentialResult<Entry> {
        Ok(Entry::new(&self.service, &self.entry)?)
    }
}

impl TokenStore for KeyringStore {
    fn load(&self) -> CredentialResult<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => {
                debug!("No token found in keyring entry {}", self.entry);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> CredentialResult<()> {
        self.entry()?.set_password(token)?;
        debug!("Stored token in keyring entry {}", self.entry);
        Ok(())
    }

    fn clear(&self) -> CredentialResult<()> {
        match self.entry()?.delete_credential() {
            Ok(()) => {
                debug!("Deleted token from keyring entry {}", self.entry);
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!("Failed to delete token from keyring: {e}");
                Err(e.into())
            }
        }
    }
}

/// Token store backed by a plain file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store that keeps the token at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileStore {
    fn load(&self) -> CredentialResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> CredentialResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        debug!("Stored token in {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> CredentialResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> CredentialResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> CredentialResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CredentialResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::Rng;

    fn scratch_path() -> PathBuf {
        let suffix: u64 = rand::thread_rng().r#gen();
        std::env::temp_dir()
            .join(format!("hrent-store-test-{suffix}"))
            .join("token")
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_logged_out() {
        let store = FileStore::new(scratch_path());
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let path = scratch_path();
        let store = FileStore::new(&path);
        store.save("abc.def.ghi").unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert!(!path.exists());
        if let Some(parent) = path.parent() {
            let _ = std::fs::remove_dir(parent);
        }
    }

    #[test]
    fn test_file_store_ignores_blank_contents() {
        let path = scratch_path();
        let store = FileStore::new(&path);
        store.save("  \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
        if let Some(parent) = path.parent() {
            let _ = std::fs::remove_dir(parent);
        }
    }

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn test_keyring_store_round_trip() {
        let store = KeyringStore::new().with_entry("auth_token_test");
        store.save("keyring-token").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("keyring-token"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
