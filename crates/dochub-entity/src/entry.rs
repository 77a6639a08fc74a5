//! Tagged union of the two listable item kinds.
//!
//! Folders and documents interleave in one listing; the variant tag makes
//! the kind explicit instead of probing item properties.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::folder::Folder;

/// The kind of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A folder entry.
    Folder,
    /// A document entry.
    Document,
}

/// One entry in a listing: a folder or a document, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    /// A folder entry.
    Folder(Folder),
    /// A document entry.
    Document(Document),
}

impl Entry {
    /// The entry's kind tag.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Folder(_) => EntryKind::Folder,
            Self::Document(_) => EntryKind::Document,
        }
    }

    /// The entry's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::Document(document) => &document.name,
        }
    }

    /// The timestamp used for date ordering: last-modified for documents,
    /// creation time for folders.
    pub fn modified_at(&self) -> DateTime<Utc> {
        match self {
            Self::Folder(folder) => folder.created_at,
            Self::Document(document) => document.last_modified,
        }
    }
}
