//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use dochub_core::AppError;

use super::permission::{Permission, PermissionSet};

/// Roles available in the identity model.
///
/// The role is a coarse label; authorization decisions are made against
/// the user's permission set. `Admin` receives the full set by
/// construction, so holding the role implies every capability gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrator, including user management.
    Admin,
    /// Regular account without user management or delete rights.
    Normal,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The permission set granted to this role when no explicit grants
    /// are supplied.
    pub fn default_permissions(&self) -> PermissionSet {
        match self {
            Self::Admin => PermissionSet::all(),
            Self::Normal => [Permission::Read, Permission::Write, Permission::Create]
                .into_iter()
                .collect(),
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "normal" => Ok(Self::Normal),
            _ => Err(AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, normal"
            ))),
        }
    }
}
