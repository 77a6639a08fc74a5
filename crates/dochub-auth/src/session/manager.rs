//! Session lifecycle: login, logout, and restore from the persistence
//! boundary.

use std::sync::Arc;

use tracing::{info, warn};

use dochub_core::config::session::SessionConfig;
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_entity::session::Session;
use dochub_entity::user::StoredUser;

use crate::directory::UserDirectory;
use crate::session::store::SessionStore;

/// Uniform failure message; unknown user and wrong password are not
/// distinguished, so usernames cannot be enumerated.
const AUTH_FAILED: &str = "invalid username or password";

/// Owns the current session and mirrors it into the persistence boundary.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    storage_key: String,
    current: Session,
}

impl SessionManager {
    /// Creates a manager with an anonymous session.
    pub fn new(store: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            storage_key: config.storage_key.clone(),
            current: Session::anonymous(),
        }
    }

    /// The current session.
    pub fn current(&self) -> &Session {
        &self.current
    }

    /// Authenticates against the directory.
    ///
    /// On success the session is established and the serialized user
    /// record is persisted under the configured key. On failure any prior
    /// session is cleared, the persisted record is removed, and an
    /// `Authentication` error with a uniform message is returned.
    pub fn login(
        &mut self,
        directory: &UserDirectory,
        username: &str,
        password: &str,
    ) -> AppResult<&Session> {
        match directory.validate_credentials(username, password) {
            Some(user) => {
                let stored = StoredUser::from(user);
                self.store
                    .put(&self.storage_key, &serde_json::to_string(&stored)?)?;
                self.current = Session::authenticated(user.clone());
                info!(username = %stored.username, role = %stored.role, "Login succeeded");
                Ok(&self.current)
            }
            None => {
                self.store.remove(&self.storage_key)?;
                self.current = Session::failed(AUTH_FAILED);
                warn!(username, "Login failed");
                Err(AppError::authentication(AUTH_FAILED))
            }
        }
    }

    /// Clears the session and the persisted record.
    pub fn logout(&mut self) -> AppResult<()> {
        if let Some(user) = &self.current.user {
            info!(username = %user.username, "Logged out");
        }
        self.current = Session::anonymous();
        self.store.remove(&self.storage_key)
    }

    /// Rebuilds the session from a persisted record, if one exists and
    /// still resolves to a directory user.
    ///
    /// Returns whether a session was restored. A stale record (user no
    /// longer in the directory) is removed and ignored.
    pub fn restore(&mut self, directory: &UserDirectory) -> AppResult<bool> {
        let Some(raw) = self.store.get(&self.storage_key)? else {
            return Ok(false);
        };

        let stored: StoredUser = serde_json::from_str(&raw)?;
        match directory.find_by_id(stored.id) {
            Some(user) => {
                self.current = Session::authenticated(user.clone());
                info!(username = %user.username, "Session restored");
                Ok(true)
            }
            None => {
                warn!(username = %stored.username, "Persisted session is stale, discarding");
                self.store.remove(&self.storage_key)?;
                self.current = Session::anonymous();
                Ok(false)
            }
        }
    }
}
