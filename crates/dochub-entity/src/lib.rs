//! # dochub-entity
//!
//! Domain entity models for DocHub. Every struct in this crate represents
//! an in-memory record or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod document;
pub mod entry;
pub mod folder;
pub mod session;
pub mod user;
