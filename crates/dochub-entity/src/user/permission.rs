//! Permission capabilities attached to a user, independent of role.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dochub_core::AppError;

/// A single grantable capability.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// View documents and folders, and toggle favorites.
    Read,
    /// Create folders and edit document metadata.
    Write,
    /// Add documents (upload).
    Create,
    /// Delete documents and folders.
    Delete,
    /// Manage user accounts, roles, and permission grants.
    ManageUsers,
}

impl Permission {
    /// All capabilities, in canonical order.
    pub const ALL: [Permission; 5] = [
        Permission::Read,
        Permission::Write,
        Permission::Create,
        Permission::Delete,
        Permission::ManageUsers,
    ];

    /// Return the permission as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::ManageUsers => "manage_users",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "create" => Ok(Self::Create),
            "delete" => Ok(Self::Delete),
            "manage_users" => Ok(Self::ManageUsers),
            _ => Err(AppError::validation(format!(
                "Invalid permission: '{s}'. Expected one of: read, write, create, delete, manage_users"
            ))),
        }
    }
}

/// An ordered set of [`Permission`] grants.
///
/// Ordered so that serialized permission lists are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full capability set.
    pub fn all() -> Self {
        Permission::ALL.into_iter().collect()
    }

    /// Whether the set contains the given permission.
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Grant a permission.
    pub fn grant(&mut self, permission: Permission) {
        self.0.insert(permission);
    }

    /// Revoke a permission.
    pub fn revoke(&mut self, permission: Permission) {
        self.0.remove(&permission);
    }

    /// Iterate over the granted permissions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Number of granted permissions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no permissions are granted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
