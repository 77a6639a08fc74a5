//! Core type definitions used across the DocHub workspace.

pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::{DocumentId, FolderId, UserId};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortKey, SortSpec};
