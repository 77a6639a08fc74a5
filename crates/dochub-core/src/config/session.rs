//! Session persistence configuration.

use serde::{Deserialize, Serialize};

/// Settings for the session persistence boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The well-known key the serialized user record is stored under in
    /// the external key-value store.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    "user".to_string()
}
