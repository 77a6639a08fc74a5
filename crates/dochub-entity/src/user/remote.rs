//! Paged response shape of the optional remote user directory.

use serde::{Deserialize, Serialize};

use super::model::User;

/// One page of users as returned by a remote directory endpoint.
///
/// DocHub consumes this shape when user records are sourced remotely
/// rather than from the local seed table. Remote records arrive without
/// credentials; accounts ingested this way cannot log in locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteUserPage {
    /// Endpoint status string (e.g. `"success"`).
    pub status: String,
    /// The user records on this page.
    pub data: Vec<User>,
    /// Paging details for the remote listing.
    pub pagination: RemotePagination,
}

/// Paging details attached to a [`RemoteUserPage`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePagination {
    /// Current page number (1-based).
    pub current_page: u64,
    /// Total number of pages available.
    pub total_pages: u64,
    /// Number of users per page.
    pub per_page: u64,
}

impl RemoteUserPage {
    /// Whether this is the final page of the remote listing.
    pub fn is_last(&self) -> bool {
        self.pagination.current_page >= self.pagination.total_pages
    }
}
