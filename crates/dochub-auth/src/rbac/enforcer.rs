//! Permission enforcement — checks a session against a required capability.
//!
//! The canonical authorization predicate is the permission set attached to
//! the user. Admin-only gates check `manage_users`; the admin role grants
//! the full set by construction, so the role itself is never consulted for
//! authorization.

use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_entity::session::Session;
use dochub_entity::user::Permission;

/// Enforces permission checks for store and directory mutations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionEnforcer;

impl PermissionEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether the session holds the required permission.
    pub fn has_permission(&self, session: &Session, permission: Permission) -> bool {
        session.has_permission(permission)
    }

    /// Requires the given permission.
    ///
    /// Returns `Ok(())` if allowed, or an `Authorization` error if the
    /// session is anonymous or lacks the grant.
    pub fn require(&self, session: &Session, permission: Permission) -> AppResult<()> {
        if self.has_permission(session, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "User '{}' does not have permission '{permission}'",
                session.username()
            )))
        }
    }

    /// Requires at least one of the given permissions.
    pub fn require_any(
        &self,
        session: &Session,
        permissions: &[Permission],
    ) -> AppResult<()> {
        if permissions
            .iter()
            .any(|p| self.has_permission(session, *p))
        {
            Ok(())
        } else {
            let wanted: Vec<&str> = permissions.iter().map(Permission::as_str).collect();
            Err(AppError::authorization(format!(
                "User '{}' has none of the permissions [{}]",
                session.username(),
                wanted.join(", ")
            )))
        }
    }

    /// Returns whether the session's user has the admin role.
    pub fn is_admin(&self, session: &Session) -> bool {
        session.is_admin()
    }
}
