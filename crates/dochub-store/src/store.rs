//! Entity store mutations with permission gating.
//!
//! Each operation follows the same discipline: check the session's
//! permission, validate references against the current snapshot, build a
//! complete successor snapshot, and commit it by swapping the `Arc`. A
//! rejected operation returns before any clone is touched, so the
//! observable snapshot is bit-for-bit unchanged.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use dochub_auth::rbac::PermissionEnforcer;
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::{DocumentId, FolderId};
use dochub_entity::document::{Document, DocumentPatch, UploadedFile};
use dochub_entity::folder::Folder;
use dochub_entity::session::Session;
use dochub_entity::user::Permission;

use crate::snapshot::Snapshot;

/// The canonical document/folder repository.
pub struct DocumentStore {
    snapshot: Arc<Snapshot>,
    enforcer: PermissionEnforcer,
}

impl DocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::new())
    }

    /// Creates a store over an existing snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            enforcer: PermissionEnforcer::new(),
        }
    }

    /// Creates a store seeded with the sample folders and documents.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        for name in ["Documents", "Projects", "Personal"] {
            store.seed_folder(name, None).expect("seed folder");
        }
        store
            .seed_document(
                UploadedFile::new("Sample Document.pdf", "PDF", 1024 * 1024),
                None,
                None,
                &[],
            )
            .expect("seed document");
        store
            .seed_document(
                UploadedFile::new("Project Proposal", "PDF", 48_128),
                None,
                Some("Annual project proposal for client XYZ"),
                &["project", "planning"],
            )
            .expect("seed document");
        store
            .seed_document(
                UploadedFile::new("Technical Documentation", "DOC", 120_320),
                None,
                Some("System architecture documentation"),
                &["technical", "documentation"],
            )
            .expect("seed document");
        store
            .seed_document(
                UploadedFile::new("Meeting Minutes", "PDF", 9_216),
                None,
                Some("Team meeting minutes from June 1st"),
                &["meeting", "internal"],
            )
            .expect("seed document");
        store
    }

    /// The current snapshot. Cheap to clone; stays consistent while held.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    // ── Seed-time construction (not permission-gated) ────────────

    /// Adds a folder at seed time. Reference invariants still apply.
    pub fn seed_folder(
        &mut self,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> AppResult<Folder> {
        let folder = self.validate_new_folder(name, parent_id)?;
        let mut next = (*self.snapshot).clone();
        next.folders.insert(folder.id, folder.clone());
        self.commit(next);
        Ok(folder)
    }

    /// Adds a document at seed time. Reference invariants still apply.
    pub fn seed_document(
        &mut self,
        upload: UploadedFile,
        folder_id: Option<FolderId>,
        description: Option<&str>,
        tags: &[&str],
    ) -> AppResult<Document> {
        if !self.snapshot.resolves(folder_id) {
            return Err(AppError::invalid_reference("Target folder does not exist"));
        }
        let mut document = Document::from_upload(upload, folder_id);
        document.metadata.description = description.map(String::from);
        document.metadata.tags = tags.iter().map(|tag| tag.to_string()).collect();
        let mut next = (*self.snapshot).clone();
        next.documents.insert(document.id, document.clone());
        self.commit(next);
        Ok(document)
    }

    // ── Permission-gated mutations ───────────────────────────────

    /// Creates a new folder. Requires `write`.
    ///
    /// Rejects an empty name (`Validation`) and an unresolvable parent
    /// (`InvalidReference`).
    pub fn create_folder(
        &mut self,
        session: &Session,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> AppResult<Folder> {
        self.enforcer.require(session, Permission::Write)?;

        let folder = self.validate_new_folder(name, parent_id)?;

        let mut next = (*self.snapshot).clone();
        next.folders.insert(folder.id, folder.clone());
        self.commit(next);

        info!(
            actor = %session.username(),
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Deletes a folder and all of its contents. Requires `delete`.
    ///
    /// Deletion cascades: every descendant folder, every document inside
    /// the subtree, and any favorite entries for those documents are
    /// removed together, so the forest never holds a dangling parent.
    pub fn delete_folder(&mut self, session: &Session, id: FolderId) -> AppResult<()> {
        self.enforcer.require(session, Permission::Delete)?;

        if self.snapshot.folder(id).is_none() {
            return Err(AppError::not_found("Folder not found"));
        }

        let subtree: BTreeSet<FolderId> = self.snapshot.descendant_folders(id).into_iter().collect();
        let doomed_docs: Vec<DocumentId> = self
            .snapshot
            .documents
            .values()
            .filter(|doc| doc.folder_id.is_some_and(|f| subtree.contains(&f)))
            .map(|doc| doc.id)
            .collect();

        let mut next = (*self.snapshot).clone();
        next.folders.retain(|folder_id, _| !subtree.contains(folder_id));
        for doc_id in &doomed_docs {
            next.documents.remove(doc_id);
            next.favorites.remove(doc_id);
        }
        self.commit(next);

        info!(
            actor = %session.username(),
            folder_id = %id,
            folders_removed = subtree.len(),
            documents_removed = doomed_docs.len(),
            "Folder deleted (cascade)"
        );

        Ok(())
    }

    /// Adds a batch of uploaded documents to a folder. Requires `write`
    /// or `create`.
    ///
    /// The batch is atomic: a rejected permission check, an unresolvable
    /// target folder, or an invalid upload leaves the store untouched.
    pub fn add_documents(
        &mut self,
        session: &Session,
        uploads: Vec<UploadedFile>,
        folder_id: Option<FolderId>,
    ) -> AppResult<Vec<Document>> {
        self.enforcer
            .require_any(session, &[Permission::Write, Permission::Create])?;

        if !self.snapshot.resolves(folder_id) {
            return Err(AppError::invalid_reference("Target folder does not exist"));
        }
        if uploads.iter().any(|upload| upload.name.trim().is_empty()) {
            return Err(AppError::validation("Document name cannot be empty"));
        }

        let documents: Vec<Document> = uploads
            .into_iter()
            .map(|upload| Document::from_upload(upload, folder_id))
            .collect();

        let mut next = (*self.snapshot).clone();
        for document in &documents {
            next.documents.insert(document.id, document.clone());
        }
        self.commit(next);

        info!(
            actor = %session.username(),
            count = documents.len(),
            folder = %folder_id.map_or_else(|| "root".to_string(), |f| f.to_string()),
            "Documents added"
        );

        Ok(documents)
    }

    /// Merges patch fields into an existing document. Requires `write`.
    pub fn update_document(
        &mut self,
        session: &Session,
        id: DocumentId,
        patch: DocumentPatch,
    ) -> AppResult<Document> {
        self.enforcer.require(session, Permission::Write)?;

        let Some(existing) = self.snapshot.document(id) else {
            return Err(AppError::not_found("Document not found"));
        };
        if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::validation("Document name cannot be empty"));
        }

        let mut document = existing.clone();
        if let Some(name) = patch.name {
            document.name = name;
        }
        if let Some(description) = patch.description {
            document.metadata.description = Some(description);
        }
        if let Some(tags) = patch.tags {
            document.metadata.tags = tags;
        }
        document.last_modified = Utc::now();

        let mut next = (*self.snapshot).clone();
        next.documents.insert(id, document.clone());
        self.commit(next);

        info!(actor = %session.username(), document_id = %id, "Document updated");

        Ok(document)
    }

    /// Deletes a document and strips it from favorites. Requires `delete`.
    pub fn delete_document(&mut self, session: &Session, id: DocumentId) -> AppResult<()> {
        self.enforcer.require(session, Permission::Delete)?;

        if self.snapshot.document(id).is_none() {
            return Err(AppError::not_found("Document not found"));
        }

        let mut next = (*self.snapshot).clone();
        next.documents.remove(&id);
        next.favorites.remove(&id);
        self.commit(next);

        info!(actor = %session.username(), document_id = %id, "Document deleted");

        Ok(())
    }

    /// Toggles a document in the favorites set. Requires `read` only —
    /// favoriting is not a write to the document itself.
    ///
    /// Returns the new favorites set. Toggling twice restores the prior
    /// set exactly. An id that no longer references a document is a
    /// `NotFound` error.
    pub fn toggle_favorite(
        &mut self,
        session: &Session,
        id: DocumentId,
    ) -> AppResult<BTreeSet<DocumentId>> {
        self.enforcer.require(session, Permission::Read)?;

        if self.snapshot.document(id).is_none() {
            return Err(AppError::not_found("Document not found"));
        }

        let mut next = (*self.snapshot).clone();
        if !next.favorites.remove(&id) {
            next.favorites.insert(id);
        }
        let favorites = next.favorites.clone();
        self.commit(next);

        Ok(favorites)
    }

    fn validate_new_folder(
        &self,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> AppResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        if !self.snapshot.resolves(parent_id) {
            return Err(AppError::invalid_reference("Parent folder does not exist"));
        }
        if self
            .snapshot
            .folders_in(parent_id)
            .any(|sibling| sibling.name == name)
        {
            return Err(AppError::conflict(format!(
                "A folder named '{name}' already exists here"
            )));
        }
        Ok(Folder::new(name, parent_id))
    }

    fn commit(&mut self, next: Snapshot) {
        debug_assert!(next.is_well_formed());
        self.snapshot = Arc::new(next);
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
