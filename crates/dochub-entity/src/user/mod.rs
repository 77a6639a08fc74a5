//! User domain entities.

pub mod model;
pub mod permission;
pub mod remote;
pub mod role;

pub use model::{CreateUser, StoredUser, User};
pub use permission::{Permission, PermissionSet};
pub use remote::{RemotePagination, RemoteUserPage};
pub use role::UserRole;
