//! Durable key-value storage adapters for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes through to whatever `DurableStorage` it was built
//! with: browser `localStorage` after hydration, an in-process map in tests.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStorage` looks up `window.localStorage` on every call instead of
//! holding a `web_sys::Storage` handle, which keeps the adapter `Send + Sync`
//! so it can live inside a context-provided signal. SSR and native builds
//! report `Unavailable` and the session simply starts logged out.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Failure reported by a storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists in this environment (SSR, disabled storage).
    #[error("durable storage is unavailable")]
    Unavailable,

    /// The backend refused a read.
    #[error("storage read failed: {0}")]
    Read(String),

    /// The backend refused a write (quota exceeded, private mode, etc.).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String-to-string storage that survives page reloads on the same client.
pub trait DurableStorage: Send + Sync {
    /// Get the value for `key`. Returns `Ok(None)` if the key was never set.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================
// BrowserStorage
// =============================================================

/// `window.localStorage`, available only with the `hydrate` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    // Browsers throw a SecurityError here when site data is blocked.
    let storage = window.local_storage().map_err(|e| {
        log::debug!("storage: localStorage blocked: {e:?}");
        StorageError::Unavailable
    })?;
    storage.ok_or(StorageError::Unavailable)
}

impl DurableStorage for BrowserStorage {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================
// MemoryStorage
// =============================================================

/// Which operations a `MemoryStorage` handle accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Access {
    #[default]
    ReadWrite,
    /// Reads succeed, writes fail as if the quota were exhausted.
    ReadOnly,
    /// Reads fail with a backend error; writes still succeed.
    Unreadable,
    /// Every operation fails as if storage were disabled.
    Disabled,
}

/// In-process storage whose clones share the same entries.
///
/// Building a second session store from a clone simulates a page reload
/// against the same browser profile.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    access: Access,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with `key` already holding `value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.lock().insert(key.to_owned(), value.to_owned());
        storage
    }

    /// A handle on the same entries that rejects every write.
    #[must_use]
    pub fn rejecting_writes(&self) -> Self {
        Self { entries: Arc::clone(&self.entries), access: Access::ReadOnly }
    }

    /// A handle on the same entries that rejects reads and writes.
    #[must_use]
    pub fn disabled(&self) -> Self {
        Self { entries: Arc::clone(&self.entries), access: Access::Disabled }
    }

    /// A handle on the same entries whose reads fail with
    /// `StorageError::Read`, as when the browser throws on `getItem`.
    #[must_use]
    pub fn failing_reads(&self) -> Self {
        Self { entries: Arc::clone(&self.entries), access: Access::Unreadable }
    }

    /// Current raw value for `key`, bypassing access checks.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.access {
            Access::Disabled => Err(StorageError::Unavailable),
            Access::Unreadable => Err(StorageError::Read("security error".to_owned())),
            Access::ReadWrite | Access::ReadOnly => Ok(self.peek(key)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.access {
            Access::ReadWrite | Access::Unreadable => {
                self.lock().insert(key.to_owned(), value.to_owned());
                Ok(())
            }
            Access::ReadOnly => Err(StorageError::Write("quota exceeded".to_owned())),
            Access::Disabled => Err(StorageError::Unavailable),
        }
    }
}
