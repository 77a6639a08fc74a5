//! Listing/query configuration.

use serde::{Deserialize, Serialize};

/// Settings for the listing query pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Default number of entries per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Number of users per page in the user-management view.
    #[serde(default = "default_users_per_page")]
    pub users_per_page: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            users_per_page: default_users_per_page(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_users_per_page() -> u64 {
    5
}
