//! Sorting types for listing views.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    /// Flip the direction.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// The attribute a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive lexicographic order on the entry name.
    Name,
    /// Last-modified timestamp order.
    Modified,
}

impl SortKey {
    /// The direction used when the caller does not choose one.
    ///
    /// Name sorts read naturally ascending; date listings show the most
    /// recently modified entries first.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::Name => SortDirection::Asc,
            Self::Modified => SortDirection::Desc,
        }
    }
}

/// A sort specification consisting of a key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The attribute to sort by.
    pub key: SortKey,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a new sort specification.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort by the given key in its default direction.
    pub fn by(key: SortKey) -> Self {
        Self::new(key, key.default_direction())
    }

    /// Ascending name order.
    pub fn name_asc() -> Self {
        Self::new(SortKey::Name, SortDirection::Asc)
    }

    /// Most recently modified first.
    pub fn modified_desc() -> Self {
        Self::new(SortKey::Modified, SortDirection::Desc)
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::name_asc()
    }
}
