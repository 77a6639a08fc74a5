//! The key-value persistence boundary for the authenticated session.
//!
//! The surrounding application persists the serialized user record under a
//! single well-known key so a session survives reloads. The store is an
//! external collaborator; DocHub only reads and writes string values.

use std::collections::HashMap;
use std::sync::Mutex;

use dochub_core::error::AppError;
use dochub_core::result::AppResult;

/// A string key-value store holding the persisted session record.
pub trait SessionStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> AppResult<()>;

    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// An in-process [`SessionStore`] used by tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::internal("Session store lock poisoned"))
    }
}

impl SessionStore for MemorySessionStore {
    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
