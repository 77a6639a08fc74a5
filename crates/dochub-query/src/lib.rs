//! # dochub-query
//!
//! The read side of DocHub: a pure listing pipeline over a store
//! [`Snapshot`](dochub_store::Snapshot). Given the current folder and a
//! [`ListRequest`], it scopes, searches, filters, orders, and paginates
//! entries without touching any state.

pub mod listing;
pub mod pipeline;

pub use listing::ListRequest;
pub use pipeline::list_entries;
