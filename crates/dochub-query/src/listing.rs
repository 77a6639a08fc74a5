//! Listing request parameters.

use serde::{Deserialize, Serialize};

use dochub_core::types::{PageRequest, SortSpec};

/// Parameters for one listing query.
///
/// The default request lists everything in the current folder, folders
/// first, names ascending, first page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRequest {
    /// Case-insensitive substring matched against entry names. An empty
    /// string matches every entry.
    pub search: String,
    /// Restrict documents to one type tag (case-insensitive match on the
    /// document's `content_type`, e.g. `"PDF"`). Folders pass this filter
    /// untouched.
    pub type_filter: Option<String>,
    /// Keep only favorited documents. Implies `documents_only`.
    pub favorites_only: bool,
    /// Drop folder entries from the listing.
    pub documents_only: bool,
    /// Ordering of the surviving entries.
    pub sort: SortSpec,
    /// Page selection.
    pub page: PageRequest,
}

impl ListRequest {
    /// A request that only searches, keeping every other stage at its
    /// default.
    pub fn searching(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    /// A request for the favorites view.
    pub fn favorites() -> Self {
        Self {
            favorites_only: true,
            ..Self::default()
        }
    }
}
