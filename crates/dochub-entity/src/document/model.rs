//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dochub_core::types::{DocumentId, FolderId};

use super::metadata::DocumentMetadata;

/// A document record (metadata only; file content is out of scope).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// The document name/title.
    pub name: String,
    /// Media/content type tag (e.g. `"PDF"`, `"DOC"`).
    pub content_type: String,
    /// Byte size of the underlying content.
    pub size_bytes: u64,
    /// When the document was last modified.
    pub last_modified: DateTime<Utc>,
    /// The folder containing this document (`None` for root).
    pub folder_id: Option<FolderId>,
    /// Attached metadata bag.
    pub metadata: DocumentMetadata,
}

impl Document {
    /// Build a stored document from an upload, assigning a fresh id and
    /// seeding the metadata bag from the upload's attributes.
    pub fn from_upload(upload: UploadedFile, folder_id: Option<FolderId>) -> Self {
        let metadata = DocumentMetadata::seeded(&upload.content_type, upload.size_bytes);
        Self {
            id: DocumentId::new(),
            name: upload.name,
            content_type: upload.content_type,
            size_bytes: upload.size_bytes,
            last_modified: upload.last_modified,
            folder_id,
            metadata,
        }
    }
}

/// An upload-boundary tuple supplied by the caller per upload gesture.
///
/// The store assigns the identifier and folder placement; the collaborator
/// performs any byte transfer before calling in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name.
    pub name: String,
    /// Media/content type tag.
    pub content_type: String,
    /// Byte size.
    pub size_bytes: u64,
    /// Last-modified stamp reported by the uploader.
    pub last_modified: DateTime<Utc>,
}

impl UploadedFile {
    /// Convenience constructor stamped with the current time.
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size_bytes,
            last_modified: Utc::now(),
        }
    }
}

/// Fields merged into an existing document by an edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentPatch {
    /// New name/title.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
}

impl DocumentPatch {
    /// A patch that renames the document.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
