/*!
The narrow interface onto the remote object store.

The core consumes this capability set and never implements it; transport,
authentication, and the query language live behind it. Every call is
synchronous and independent, and the engines wrap each one in the shared
retry policy before use.
*/

use crate::error::Result;
use crate::file::FileMetadata;
use crate::record::{ArtifactId, GenericRecord};
use std::path::Path;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

/// Query enumerating the legal choices for one choice enumeration.
///
/// Carries only the member GUIDs in declaration order; building richer query
/// expressions is the provider's concern, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceQuery {
    pub member_guids: &'static [Uuid],
}

/// Remote provider capability set consumed by the engines.
#[cfg_attr(test, automock)]
pub trait RemoteProvider {
    /// Enumerate legal choice records for a choice enumeration, in the same
    /// order as the queried member GUIDs.
    fn query(&self, query: &ChoiceQuery) -> Result<Vec<GenericRecord>>;

    /// Fetch a single record; fails with `NotFound` when the id is unknown.
    fn read_single(&self, artifact_id: ArtifactId) -> Result<GenericRecord>;

    /// Create one record, returning its newly assigned artifact id.
    fn create_single(&self, record: &GenericRecord) -> Result<ArtifactId>;

    /// Create a batch of records in one call.
    fn create(&self, records: &[GenericRecord]) -> Result<Vec<ArtifactId>>;

    /// Update an existing record.
    fn update(&self, record: &GenericRecord) -> Result<()>;

    /// Upload file content from disk against a file field of an object.
    fn upload_file(
        &self,
        field_artifact_id: ArtifactId,
        object_id: ArtifactId,
        source: &Path,
    ) -> Result<()>;

    /// Download file content and metadata from a file field of an object.
    fn download_file(
        &self,
        field_artifact_id: ArtifactId,
        object_id: ArtifactId,
    ) -> Result<(FileMetadata, Vec<u8>)>;
}

// A shared reference to a provider is itself a provider, so callers can keep
// hold of the concrete instance while the DAO borrows it.
impl<T: RemoteProvider + ?Sized> RemoteProvider for &T {
    fn query(&self, query: &ChoiceQuery) -> Result<Vec<GenericRecord>> {
        (**self).query(query)
    }

    fn read_single(&self, artifact_id: ArtifactId) -> Result<GenericRecord> {
        (**self).read_single(artifact_id)
    }

    fn create_single(&self, record: &GenericRecord) -> Result<ArtifactId> {
        (**self).create_single(record)
    }

    fn create(&self, records: &[GenericRecord]) -> Result<Vec<ArtifactId>> {
        (**self).create(records)
    }

    fn update(&self, record: &GenericRecord) -> Result<()> {
        (**self).update(record)
    }

    fn upload_file(
        &self,
        field_artifact_id: ArtifactId,
        object_id: ArtifactId,
        source: &Path,
    ) -> Result<()> {
        (**self).upload_file(field_artifact_id, object_id, source)
    }

    fn download_file(
        &self,
        field_artifact_id: ArtifactId,
        object_id: ArtifactId,
    ) -> Result<(FileMetadata, Vec<u8>)> {
        (**self).download_file(field_artifact_id, object_id)
    }
}
