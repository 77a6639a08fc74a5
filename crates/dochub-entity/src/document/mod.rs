//! Document domain entities.

pub mod metadata;
pub mod model;

pub use metadata::DocumentMetadata;
pub use model::{Document, DocumentPatch, UploadedFile};
