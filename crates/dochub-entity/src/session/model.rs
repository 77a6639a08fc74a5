//! Session entity model.

use serde::{Deserialize, Serialize};

use crate::user::{Permission, User};

/// The authentication state a caller acts under.
///
/// Every store mutation takes the current session so that it knows *who*
/// is acting and which permission grants apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The currently authenticated user, if any.
    pub user: Option<User>,
    /// The message from the last failed authentication attempt, if any.
    pub last_error: Option<String>,
}

impl Session {
    /// An unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session authenticated as the given user.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            last_error: None,
        }
    }

    /// A cleared session carrying the last authentication failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            user: None,
            last_error: Some(message.into()),
        }
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user holds the given permission.
    ///
    /// Always false for an anonymous session.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.has_permission(permission))
    }

    /// Whether the signed-in user has the admin role.
    ///
    /// A role query only; authorization gates go through the permission
    /// set (`manage_users` for admin-only operations).
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// The acting username, for log context.
    pub fn username(&self) -> &str {
        self.user.as_ref().map_or("<anonymous>", |u| &u.username)
    }
}
