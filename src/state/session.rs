//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `SessionStore` as `RwSignal<SessionStore>` context. It
//! starts `unloaded` so server and client render the same markup, then a
//! client-side effect calls `load` once after mount. Pages read `logged_in()`
//! to pick what to render and call `set_token` / `log_out` in response to
//! user actions.
//!
//! DESIGN
//! ======
//! `SessionState` holds the pure `{token, logged_in}` transitions and never
//! touches storage. `SessionStore` applies a transition first, then writes the
//! token through to `DurableStorage`. A failed write is logged and reported
//! as `Persistence::NotPersisted`; the in-memory state has already advanced.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::util::storage::{DurableStorage, StorageError};

/// Scheme prefix the backend auth middleware strips from `Authorization`.
const AUTH_SCHEME: &str = "Token";

// =============================================================
// SessionState
// =============================================================

/// The `{token, logged_in}` pair.
///
/// Fields are private so `logged_in` can never be true with an empty token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: String,
    logged_in: bool,
}

impl SessionState {
    /// No credential, not logged in.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// State for a value read back from durable storage at boot.
    ///
    /// A missing or empty value means logged out.
    pub fn from_persisted(value: Option<String>) -> Self {
        match value {
            Some(token) if !token.is_empty() => Self { token, logged_in: true },
            _ => Self::logged_out(),
        }
    }

    /// Logged-in state carrying `token`, or `None` if `token` is empty.
    pub fn with_token(&self, token: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        Some(Self { token: token.to_owned(), logged_in: true })
    }

    /// Logged-out state. Clearing an already cleared state is a no-op.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::logged_out()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }
}

// =============================================================
// SessionStore
// =============================================================

/// Outcome of the durable write that follows a session transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    /// The durable copy now matches the in-memory state.
    Persisted,
    /// The in-memory state changed but the durable write failed; the change
    /// will not survive a reload.
    NotPersisted,
    /// Nothing changed and nothing was written.
    Skipped,
}

/// Single source of truth for whether the user is authenticated.
#[derive(Clone)]
pub struct SessionStore {
    state: SessionState,
    storage: Arc<dyn DurableStorage>,
    key: String,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The token is a credential; keep it out of debug output.
        f.debug_struct("SessionStore")
            .field("logged_in", &self.state.logged_in)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// A logged-out store bound to `storage`, without reading it yet.
    ///
    /// Both the server render and the first client render start from this so
    /// their markup matches; `load` then picks up the persisted token.
    pub fn unloaded(storage: Arc<dyn DurableStorage>, config: &ClientConfig) -> Self {
        Self { state: SessionState::logged_out(), storage, key: config.token_key.clone() }
    }

    /// Hydrate the session from whatever token `storage` holds under the
    /// configured key. Read failures are treated as "no token".
    pub fn initialize(storage: Arc<dyn DurableStorage>, config: &ClientConfig) -> Self {
        let mut store = Self::unloaded(storage, config);
        store.load();
        store
    }

    /// Replace the in-memory state with the persisted one. Never writes.
    pub fn load(&mut self) {
        let persisted = match self.storage.get(&self.key) {
            Ok(value) => value,
            Err(StorageError::Unavailable) => {
                log::debug!("session: durable storage unavailable, starting logged out");
                None
            }
            Err(e) => {
                log::warn!("session: could not read persisted token: {e}");
                None
            }
        };
        self.state = SessionState::from_persisted(persisted);
        log::debug!("session: loaded (logged_in={})", self.state.logged_in());
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> &str {
        self.state.token()
    }

    pub fn logged_in(&self) -> bool {
        self.state.logged_in()
    }

    /// `Authorization` header value for authenticated requests.
    pub fn authorization_header(&self) -> Option<String> {
        self.logged_in().then(|| format!("{AUTH_SCHEME} {}", self.token()))
    }

    /// Record a credential from a successful login and persist it.
    ///
    /// An empty `token` leaves the session untouched.
    pub fn set_token(&mut self, token: &str) -> Persistence {
        let Some(next) = self.state.with_token(token) else {
            log::warn!("session: ignoring empty token");
            return Persistence::Skipped;
        };
        self.state = next;
        log::debug!("session: logged in");
        self.write_through()
    }

    /// Drop the credential and persist the empty token.
    ///
    /// Idempotent; the durable write happens even when already logged out.
    pub fn log_out(&mut self) -> Persistence {
        self.state = self.state.cleared();
        log::debug!("session: logged out");
        self.write_through()
    }

    fn write_through(&self) -> Persistence {
        match self.storage.set(&self.key, self.state.token()) {
            Ok(()) => Persistence::Persisted,
            Err(e) => {
                log::warn!("session: token not persisted, change will not survive reload: {e}");
                Persistence::NotPersisted
            }
        }
    }
}
