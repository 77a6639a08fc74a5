//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dochub_core::types::UserId;

use super::permission::{Permission, PermissionSet};
use super::role::UserRole;

/// A registered user in the DocHub identity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Opaque credential, compared verbatim at login. Never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
    /// User role.
    pub role: UserRole,
    /// Capabilities granted to this user.
    pub permissions: PermissionSet,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user holds the given permission.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Check if this user has the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Credential for the new account.
    pub password: String,
    /// Assigned role.
    pub role: UserRole,
    /// Explicit permission grants; the role's defaults when omitted.
    #[serde(default)]
    pub permissions: Option<PermissionSet>,
}

/// The serialized user record persisted at the session boundary.
///
/// This is the exact JSON shape `{id, username, role, permissions[]}`
/// stored under the configured key in the external key-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    /// The user's identifier.
    pub id: UserId,
    /// The user's login name.
    pub username: String,
    /// The user's role.
    pub role: UserRole,
    /// The user's permission grants.
    pub permissions: PermissionSet,
}

impl From<&User> for StoredUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            permissions: user.permissions.clone(),
        }
    }
}
