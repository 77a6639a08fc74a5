//! The process-wide identity table.
//!
//! Users are created at seed time or through admin-gated operations.
//! Credential validation is a linear exact-match scan that fails silently
//! (returns `None`) and never errors.

use chrono::Utc;
use tracing::{info, warn};

use dochub_core::config::seed::SeedConfig;
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::{PageRequest, PageResponse, SortDirection, UserId};
use dochub_entity::session::Session;
use dochub_entity::user::{CreateUser, Permission, PermissionSet, RemoteUserPage, User, UserRole};

use crate::rbac::PermissionEnforcer;

/// Users shown per page in the management view.
const USERS_PER_PAGE: u64 = 5;

/// Query parameters for the user-management listing.
#[derive(Debug, Clone)]
pub struct UserQuery {
    /// Case-insensitive substring match on the username; empty matches all.
    pub search: String,
    /// Username sort direction.
    pub direction: SortDirection,
    /// Page selection.
    pub page: PageRequest,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            direction: SortDirection::default(),
            page: PageRequest::new(1, USERS_PER_PAGE),
        }
    }
}

/// In-memory table of user accounts, singleton for the session lifetime.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    enforcer: PermissionEnforcer,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with the configured admin and normal
    /// accounts.
    pub fn seeded(config: &SeedConfig) -> Self {
        let mut directory = Self::new();
        directory.insert_unchecked(
            &config.admin_username,
            &config.admin_password,
            UserRole::Admin,
            None,
        );
        directory.insert_unchecked(
            &config.user_username,
            &config.user_password,
            UserRole::Normal,
            None,
        );
        directory
    }

    /// Validates a username/password pair against the table.
    ///
    /// Comparison is exact string equality on the stored credential. This
    /// is a known weakness of the model (no hashing, no constant-time
    /// comparison); it is intentional and must not be "fixed" here with
    /// differing semantics.
    pub fn validate_credentials(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.username == username && user.password == password)
    }

    /// Finds a user by username.
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    /// Finds a user by identifier.
    pub fn find_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Number of accounts in the table.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Creates a new user account. Requires `manage_users`.
    pub fn create_user(&mut self, session: &Session, req: CreateUser) -> AppResult<User> {
        self.enforcer.require(session, Permission::ManageUsers)?;

        if req.username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if self.find_by_username(&req.username).is_some() {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                req.username
            )));
        }

        let permissions = req
            .permissions
            .unwrap_or_else(|| req.role.default_permissions());
        let user =
            self.insert_unchecked(&req.username, &req.password, req.role, Some(permissions));

        info!(actor = %session.username(), username = %user.username, role = %user.role, "User created");

        Ok(user.clone())
    }

    /// Changes a user's role, resetting their grants to the new role's
    /// defaults. Requires `manage_users`.
    pub fn set_role(
        &mut self,
        session: &Session,
        user_id: UserId,
        role: UserRole,
    ) -> AppResult<User> {
        self.enforcer.require(session, Permission::ManageUsers)?;

        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        user.role = role;
        user.permissions = role.default_permissions();

        info!(actor = %session.username(), username = %user.username, role = %role, "User role changed");

        Ok(user.clone())
    }

    /// Replaces a user's permission grants. Requires `manage_users`.
    pub fn set_permissions(
        &mut self,
        session: &Session,
        user_id: UserId,
        permissions: PermissionSet,
    ) -> AppResult<User> {
        self.enforcer.require(session, Permission::ManageUsers)?;

        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        user.permissions = permissions;

        info!(actor = %session.username(), username = %user.username, "User permissions changed");

        Ok(user.clone())
    }

    /// Lists users for the management view: search, sort, paginate.
    pub fn list_users(&self, query: &UserQuery) -> PageResponse<User> {
        let needle = query.search.to_lowercase();
        let mut matched: Vec<User> = self
            .users
            .iter()
            .filter(|user| needle.is_empty() || user.username.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            let ordering = a
                .username
                .to_lowercase()
                .cmp(&b.username.to_lowercase())
                .then_with(|| a.id.cmp(&b.id));
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        PageResponse::paginate(matched, &query.page)
    }

    /// Ingests one page from a remote user directory. Requires
    /// `manage_users`.
    ///
    /// Records already present (by username) are replaced in place so that
    /// re-fetching a page is idempotent. Returns the number of records
    /// taken from the page.
    pub fn ingest_remote_page(
        &mut self,
        session: &Session,
        page: RemoteUserPage,
    ) -> AppResult<usize> {
        self.enforcer.require(session, Permission::ManageUsers)?;

        if page.status != "success" {
            warn!(status = %page.status, "Remote user page rejected");
            return Err(AppError::validation(format!(
                "Remote directory returned status '{}'",
                page.status
            )));
        }

        let count = page.data.len();
        for remote in page.data {
            match self
                .users
                .iter_mut()
                .find(|user| user.username == remote.username)
            {
                Some(existing) => *existing = remote,
                None => self.users.push(remote),
            }
        }

        info!(
            count,
            page = page.pagination.current_page,
            total_pages = page.pagination.total_pages,
            "Remote user page ingested"
        );

        Ok(count)
    }

    fn insert_unchecked(
        &mut self,
        username: &str,
        password: &str,
        role: UserRole,
        permissions: Option<PermissionSet>,
    ) -> &User {
        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            password: password.to_string(),
            role,
            permissions: permissions.unwrap_or_else(|| role.default_permissions()),
            created_at: Utc::now(),
        };
        self.users.push(user);
        self.users.last().expect("just pushed")
    }
}
