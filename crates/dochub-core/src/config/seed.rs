//! Seed data configuration.

use serde::{Deserialize, Serialize};

/// Settings for the identity table and sample content seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Username of the seeded administrator account.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Password of the seeded administrator account.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Username of the seeded normal account.
    #[serde(default = "default_user_username")]
    pub user_username: String,
    /// Password of the seeded normal account.
    #[serde(default = "default_user_password")]
    pub user_password: String,
    /// Whether to seed the sample folders and documents.
    #[serde(default = "default_true")]
    pub sample_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            user_username: default_user_username(),
            user_password: default_user_password(),
            sample_data: true,
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_user_username() -> String {
    "user".to_string()
}

fn default_user_password() -> String {
    "user123".to_string()
}

fn default_true() -> bool {
    true
}
