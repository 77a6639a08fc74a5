//! The immutable, fully-materialized view of the entity store.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use dochub_core::types::{DocumentId, FolderId};
use dochub_entity::document::Document;
use dochub_entity::folder::Folder;

/// All entity collections at one instant.
///
/// Snapshots are only ever replaced wholesale, never edited in place, so
/// any reader holding one sees a consistent forest: every non-root parent
/// reference resolves and no cycles exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Folders keyed by identifier.
    pub folders: BTreeMap<FolderId, Folder>,
    /// Documents keyed by identifier.
    pub documents: BTreeMap<DocumentId, Document>,
    /// Identifiers of favorited documents; always a subset of `documents`.
    pub favorites: BTreeSet<DocumentId>,
}

impl Snapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a folder.
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(&id)
    }

    /// Look up a document.
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// Whether a folder reference resolves: the root sentinel always does,
    /// a concrete id must exist.
    pub fn resolves(&self, folder: Option<FolderId>) -> bool {
        match folder {
            None => true,
            Some(id) => self.folders.contains_key(&id),
        }
    }

    /// Folders whose parent is the given folder (`None` for root).
    pub fn folders_in(&self, parent: Option<FolderId>) -> impl Iterator<Item = &Folder> {
        self.folders
            .values()
            .filter(move |folder| folder.parent_id == parent)
    }

    /// Documents placed in the given folder (`None` for root).
    pub fn documents_in(&self, folder: Option<FolderId>) -> impl Iterator<Item = &Document> {
        self.documents
            .values()
            .filter(move |document| document.folder_id == folder)
    }

    /// Whether a document is favorited.
    pub fn is_favorite(&self, id: DocumentId) -> bool {
        self.favorites.contains(&id)
    }

    /// The given folder and every folder below it, breadth-first.
    ///
    /// Returns an empty list when the folder does not exist.
    pub fn descendant_folders(&self, root: FolderId) -> Vec<FolderId> {
        if !self.folders.contains_key(&root) {
            return Vec::new();
        }
        let mut subtree = vec![root];
        let mut frontier = vec![root];
        while let Some(parent) = frontier.pop() {
            for child in self.folders_in(Some(parent)) {
                subtree.push(child.id);
                frontier.push(child.id);
            }
        }
        subtree
    }

    /// Verify the forest invariant: every non-root parent reference
    /// resolves to an existing folder and following parents always
    /// terminates at the root.
    pub fn is_well_formed(&self) -> bool {
        self.folders.values().all(|folder| {
            let mut seen = 0usize;
            let mut cursor = folder.parent_id;
            while let Some(parent) = cursor {
                match self.folders.get(&parent) {
                    Some(node) => cursor = node.parent_id,
                    None => return false,
                }
                seen += 1;
                if seen > self.folders.len() {
                    return false;
                }
            }
            true
        }) && self.favorites.iter().all(|id| self.documents.contains_key(id))
            && self
                .documents
                .values()
                .all(|document| self.resolves(document.folder_id))
    }
}
