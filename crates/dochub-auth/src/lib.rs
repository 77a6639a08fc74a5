//! # dochub-auth
//!
//! Authentication and authorization for DocHub.
//!
//! ## Modules
//!
//! - `directory` — the process-wide identity table: credential validation
//!   and admin-gated user management
//! - `rbac` — permission-set enforcement gating every store mutation
//! - `session` — session lifecycle and the external persistence boundary

pub mod directory;
pub mod rbac;
pub mod session;

pub use directory::{UserDirectory, UserQuery};
pub use rbac::PermissionEnforcer;
pub use session::{MemorySessionStore, SessionManager, SessionStore};
