//! # dochub-store
//!
//! The canonical in-memory collections of documents and folders, the
//! favorites set, and the breadcrumb navigator.
//!
//! Every mutation is permission-gated and atomic: it validates against the
//! current [`Snapshot`], builds a complete successor, and swaps it in.
//! Readers hold an `Arc` to a snapshot and never observe a partial write.

pub mod navigation;
pub mod snapshot;
pub mod store;

pub use navigation::{Breadcrumb, Navigator};
pub use snapshot::Snapshot;
pub use store::DocumentStore;
