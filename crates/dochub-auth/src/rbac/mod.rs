//! Permission-set enforcement.

pub mod enforcer;

pub use enforcer::PermissionEnforcer;
