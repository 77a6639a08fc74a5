//! Document metadata value object.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata bag attached to a document.
///
/// Carries at minimum the creation time and the content-type/size the
/// document was created with; arbitrary key-value pairs go into `custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// When the document record was created.
    pub created_at: DateTime<Utc>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Arbitrary tags for categorization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Key-value custom properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, serde_json::Value>,
}

impl DocumentMetadata {
    /// Seed a metadata bag for a newly added document.
    pub fn seeded(content_type: &str, size_bytes: u64) -> Self {
        let mut custom = BTreeMap::new();
        custom.insert("content_type".to_string(), content_type.into());
        custom.insert("size_bytes".to_string(), size_bytes.into());
        Self {
            created_at: Utc::now(),
            description: None,
            tags: Vec::new(),
            custom,
        }
    }
}
