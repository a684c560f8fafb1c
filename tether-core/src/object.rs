/*!
The typed side of the mapping: the [`MappedObject`] contract and the
single-object reference wrapper [`ObjectRef`].

A mapped type owns its schema and the thin per-field glue between its Rust
fields and the record representation. The traversal policy (depth bounds,
choice resolution, file transfer, identifier propagation) lives entirely in
the engines; the glue hooks only say which field is which.
*/

use crate::dao::{Hydrator, Persister};
use crate::error::Result;
use crate::provider::RemoteProvider;
use crate::record::{ArtifactId, GenericRecord};
use crate::schema::ObjectSchema;

/// Sentinel stamped into a reference field when resolving the referenced
/// instance failed during a parent insert.
pub const FAILED_REFERENCE: ArtifactId = -1;

/// An instance of a mapped type: one remote entity kind with typed fields.
///
/// Identifier 0 always means "must be inserted"; any positive value means
/// "already persisted". The engines are the only code that mutates instances,
/// and only to stamp back assigned identifiers and parent links.
pub trait MappedObject: Default + 'static {
    /// Static declarative schema of this type.
    fn schema() -> &'static ObjectSchema;

    fn artifact_id(&self) -> ArtifactId;
    fn set_artifact_id(&mut self, artifact_id: ArtifactId);

    /// Stamp the parent's identifier before this instance is written as a
    /// child. Types that are never children implement this as a no-op.
    fn set_parent_artifact_id(&mut self, parent_id: ArtifactId);

    /// Build the outbound record: scalars, choice member GUIDs, reference
    /// ids, file descriptors. Child lists and file payloads are excluded;
    /// the persistence engine moves those through their own operations.
    fn to_record(&self) -> GenericRecord;

    /// Populate this instance from a fetched record, converting each
    /// declared field through the hydrator's helpers.
    fn hydrate<P: RemoteProvider>(
        &mut self,
        record: &GenericRecord,
        cx: &Hydrator<'_, P>,
    ) -> Result<()>;

    /// Resolve single-object reference fields before the record write.
    fn persist_references<P: RemoteProvider>(&mut self, cx: &Persister<'_, P>) -> Result<()> {
        let _ = cx;
        Ok(())
    }

    /// Upload file fields against the freshly assigned identifier.
    fn persist_files<P: RemoteProvider>(
        &self,
        cx: &Persister<'_, P>,
        object_id: ArtifactId,
    ) -> Result<()> {
        let _ = (cx, object_id);
        Ok(())
    }

    /// Insert child lists under the freshly assigned identifier.
    fn persist_children<P: RemoteProvider>(
        &mut self,
        cx: &Persister<'_, P>,
        parent_id: ArtifactId,
    ) -> Result<()> {
        let _ = (cx, parent_id);
        Ok(())
    }
}

/// A single-object reference field: the reference identifier the record
/// carries, plus the hydrated instance when the read depth produced one.
///
/// On the write path the persistence engine stamps the identifier of a
/// freshly inserted nested instance here, or the sentinel -1 when resolving
/// the reference failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRef<T> {
    pub artifact_id: ArtifactId,
    pub value: Option<T>,
}

impl<T> Default for ObjectRef<T> {
    fn default() -> Self {
        Self {
            artifact_id: 0,
            value: None,
        }
    }
}

impl<T> ObjectRef<T> {
    /// An empty reference.
    pub fn unset() -> Self {
        Self::default()
    }

    /// A reference known only by identifier.
    pub fn by_id(artifact_id: ArtifactId) -> Self {
        Self {
            artifact_id,
            value: None,
        }
    }

    pub fn is_set(&self) -> bool {
        self.artifact_id != 0 || self.value.is_some()
    }
}

impl<T: MappedObject> ObjectRef<T> {
    /// A reference holding an instance; the identifier follows the instance.
    pub fn to(value: T) -> Self {
        Self {
            artifact_id: value.artifact_id(),
            value: Some(value),
        }
    }
}
