/*!
File-valued fields.

Binary content is kept apart from the rest of a record because the store
moves it through dedicated upload/download operations. A hydrated
[`FileField`] carries payload and metadata only when the read depth asked
for them; the short name hint from the record is populated regardless.
*/

use crate::record::ArtifactId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the binary payload lives on the write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileContent {
    /// Upload directly from a file on disk.
    Path(PathBuf),
    /// In-memory buffer, materialized to a temp file for upload.
    Bytes(Vec<u8>),
}

/// Metadata the store tracks alongside the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub file_name: String,
}

impl FileMetadata {
    pub fn new<S: Into<String>>(file_name: S) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// A file field on a typed object instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileField {
    /// Artifact id of the file field itself, required for upload/download.
    pub field_artifact_id: ArtifactId,
    /// Short-text hint from the record; not authoritative for the file name.
    pub name_hint: Option<String>,
    pub content: Option<FileContent>,
    pub metadata: Option<FileMetadata>,
}

impl FileField {
    pub fn new(field_artifact_id: ArtifactId) -> Self {
        Self {
            field_artifact_id,
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: FileContent, metadata: FileMetadata) -> Self {
        self.content = Some(content);
        self.metadata = Some(metadata);
        self
    }

    /// True when there is a payload to push on insert/update.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}
