//! Session lifecycle and the external persistence boundary.

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{MemorySessionStore, SessionStore};
