//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dochub_core::types::FolderId;

/// A folder in the document hierarchy.
///
/// The parent graph forms a forest rooted at the `None` sentinel: a
/// folder's parent is either another existing folder or the root, never
/// itself, and never a descendant of itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name (non-empty).
    pub name: String,
    /// Parent folder ID (`None` for root-level folders).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Create a folder with a fresh identifier.
    pub fn new(name: impl Into<String>, parent_id: Option<FolderId>) -> Self {
        Self {
            id: FolderId::new(),
            name: name.into(),
            parent_id,
            created_at: Utc::now(),
        }
    }

    /// Check if this folder sits at the root level (no parent).
    pub fn is_root_level(&self) -> bool {
        self.parent_id.is_none()
    }
}
