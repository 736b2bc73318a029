//! Session state: the persisted bearer token and the user id derived from it.

pub mod claims;
mod store;

pub use store::{
    CredentialError, CredentialResult, FileStore, KeyringStore, MemoryStore, TokenStore,
};

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

#[derive(Debug, Default)]
struct State {
    token: Option<String>,
    user_id: Option<String>,
}

impl State {
    fn from_token(token: Option<String>) -> Self {
        let user_id = token.as_deref().and_then(claims::user_id_from_token);
        Self { token, user_id }
    }
}

/// Authenticated session shared by everything that talks to the API.
///
/// The token is loaded from the store once, kept in memory, and written
/// through on every change. Wrap it in an `Arc` to share it.
pub struct Session {
    store: Box<dyn TokenStore>,
    state: RwLock<State>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Session")
            .field("authenticated", &state.token.is_some())
            .field("user_id", &state.user_id)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Creates a session backed by `store`, loading any persisted token.
    ///
    /// A store that cannot be read is treated as logged out.
    #[must_use]
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let token = match store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to load stored token, starting logged out: {e}");
                None
            }
        };
        debug!("Session loaded (authenticated: {})", token.is_some());

        Self {
            store: Box::new(store),
            state: RwLock::new(State::from_token(token)),
        }
    }

    /// Creates a session that is not persisted anywhere.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Returns true if a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Returns the user id read from the token claims.
    ///
    /// `None` when logged out or when the token cannot be decoded.
    #[must_use]
    pub fn current_user_id(&self) -> Option<String> {
        self.read().user_id.clone()
    }

    /// Replaces the token (or clears it with `None`) and persists the change.
    ///
    /// The store is written first. If that fails the session keeps its
    /// previous token.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set_token(&self, token: Option<&str>) -> CredentialResult<()> {
        let mut state = self.write();
        match token {
            Some(token) => self.store.save(token)?,
            None => self.store.clear()?,
        }
        *state = State::from_token(token.map(str::to_owned));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> CredentialResult<Option<String>> {
            Err(std::io::Error::other("unreadable").into())
        }

        fn save(&self, _token: &str) -> CredentialResult<()> {
            Err(std::io::Error::other("read-only").into())
        }

        fn clear(&self) -> CredentialResult<()> {
            Err(std::io::Error::other("read-only").into())
        }
    }

    #[test]
    fn test_loads_persisted_token() {
        let session = Session::new(MemoryStore::with_token("abc.eyJpZCI6IjQyIn0.xyz"));
        assert!(session.is_authenticated());
        assert_eq!(session.current_user_id().as_deref(), Some("42"));
    }

    #[test]
    fn test_starts_logged_out() {
        let session = Session::in_memory();
        assert!(session.token().is_none());
        assert!(session.current_user_id().is_none());
    }

    #[test]
    fn test_set_and_clear_token() {
        let session = Session::in_memory();
        session.set_token(Some("abc.eyJpZCI6IjQyIn0.xyz")).unwrap();
        assert_eq!(session.token().as_deref(), Some("abc.eyJpZCI6IjQyIn0.xyz"));
        assert_eq!(session.current_user_id().as_deref(), Some("42"));

        session.set_token(None).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.current_user_id().is_none());
    }

    #[test]
    fn test_opaque_token_has_no_user_id() {
        let session = Session::in_memory();
        session.set_token(Some("opaque")).unwrap();
        assert!(session.is_authenticated());
        assert!(session.current_user_id().is_none());
    }

    #[test]
    fn test_unreadable_store_means_logged_out() {
        let session = Session::new(BrokenStore);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_failed_persist_keeps_previous_token() {
        let session = Session::new(BrokenStore);
        assert!(session.set_token(Some("tok")).is_err());
        assert!(session.token().is_none());
        assert!(session.current_user_id().is_none());
    }

    #[test]
    fn test_failed_clear_keeps_session() {
        let session = Session::new(BrokenStore);
        *session.write() = State::from_token(Some("abc.eyJpZCI6IjQyIn0.xyz".into()));

        assert!(session.set_token(None).is_err());
        assert!(session.is_authenticated());
        assert_eq!(session.current_user_id().as_deref(), Some("42"));
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::new(MemoryStore::with_token("secret-token"));
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
    }
}
