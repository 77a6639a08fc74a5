//! Breadcrumb navigation over the folder forest.
//!
//! The navigator owns the current-folder context: an ordered path of
//! crumbs from the root sentinel to the folder being browsed. The first
//! crumb is always the root, and each following crumb is a direct child
//! of the one before it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::FolderId;

use crate::snapshot::Snapshot;

/// Display name of the root sentinel crumb.
const ROOT_NAME: &str = "Root";

/// One step in the breadcrumb path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// The folder this crumb points at (`None` for the root sentinel).
    pub id: Option<FolderId>,
    /// Display name.
    pub name: String,
}

impl Breadcrumb {
    fn root() -> Self {
        Self {
            id: None,
            name: ROOT_NAME.to_string(),
        }
    }
}

/// Tracks the breadcrumb path and the current folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigator {
    path: Vec<Breadcrumb>,
}

impl Navigator {
    /// A navigator positioned at the root.
    pub fn new() -> Self {
        Self {
            path: vec![Breadcrumb::root()],
        }
    }

    /// The folder currently being browsed (`None` for root).
    pub fn current_folder(&self) -> Option<FolderId> {
        self.path.last().and_then(|crumb| crumb.id)
    }

    /// The breadcrumb path from root to the current folder.
    pub fn path(&self) -> &[Breadcrumb] {
        &self.path
    }

    /// Descends into a folder.
    ///
    /// The folder must exist in the snapshot (`NotFound`) and be a direct
    /// child of the current folder (`InvalidReference`).
    pub fn enter_folder(
        &mut self,
        snapshot: &Snapshot,
        id: FolderId,
    ) -> AppResult<&[Breadcrumb]> {
        let folder = snapshot
            .folder(id)
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        if folder.parent_id != self.current_folder() {
            return Err(AppError::invalid_reference(
                "Folder is not a child of the current folder",
            ));
        }

        self.path.push(Breadcrumb {
            id: Some(folder.id),
            name: folder.name.clone(),
        });
        debug!(folder_id = %id, depth = self.path.len(), "Entered folder");

        Ok(&self.path)
    }

    /// Steps back to the parent folder. The root crumb is never popped.
    pub fn go_back(&mut self) -> &[Breadcrumb] {
        if self.path.len() > 1 {
            self.path.pop();
        }
        &self.path
    }

    /// Jumps to the crumb at `index`, truncating everything after it.
    ///
    /// `index` must address an existing crumb (`Validation` otherwise).
    pub fn jump_to(&mut self, index: usize) -> AppResult<&[Breadcrumb]> {
        if index >= self.path.len() {
            return Err(AppError::validation(format!(
                "Breadcrumb index {index} is out of bounds (path length {})",
                self.path.len()
            )));
        }
        self.path.truncate(index + 1);
        Ok(&self.path)
    }

    /// Truncates the path to its deepest prefix that is still valid in
    /// the given snapshot.
    ///
    /// Called after deletions so the current-folder context never points
    /// at a folder that no longer exists.
    pub fn resync(&mut self, snapshot: &Snapshot) -> &[Breadcrumb] {
        let mut valid = 1;
        for crumb in &self.path[1..] {
            let Some(id) = crumb.id else { break };
            match snapshot.folder(id) {
                Some(folder) if folder.parent_id == self.path[valid - 1].id => valid += 1,
                _ => break,
            }
        }
        self.path.truncate(valid);
        &self.path
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
