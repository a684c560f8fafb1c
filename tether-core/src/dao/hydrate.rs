/*!
The hydration engine: generic record to typed object graph.

Depth-first and sequential; every descent hands nested reads one less
remaining level, which is also what suppresses file downloads below the
requested depth.
*/

use super::Dao;
use crate::choice::ChoiceEnum;
use crate::depth::Depth;
use crate::error::Result;
use crate::file::{FileContent, FileField};
use crate::object::{MappedObject, ObjectRef};
use crate::provider::RemoteProvider;
use crate::record::{ArtifactId, GenericRecord, Value};
use std::collections::BTreeSet;
use tracing::debug;
use uuid::Uuid;

impl<P: RemoteProvider> Dao<P> {
    /// Fetch the record for `artifact_id` and hydrate it into a typed
    /// instance, descending into references, child lists, and file content
    /// as far as `depth` permits.
    pub fn get_object<T: MappedObject>(&self, artifact_id: ArtifactId, depth: Depth) -> Result<T> {
        debug!(
            type_name = T::schema().name,
            artifact_id,
            ?depth,
            "hydrating object"
        );
        let record = self.retry.invoke(|| self.provider.read_single(artifact_id))?;

        let mut object = T::default();
        object.set_artifact_id(record.artifact_id);

        let cx = Hydrator {
            dao: self,
            depth,
            object_id: record.artifact_id,
        };
        object.hydrate(&record, &cx)?;
        Ok(object)
    }
}

/// Per-read conversion context handed to [`MappedObject::hydrate`].
///
/// Holds the depth remaining for this object and the object's identifier
/// (needed for file downloads). Field conversions are independent of each
/// other, so hook implementations may call these helpers in any order.
pub struct Hydrator<'a, P: RemoteProvider> {
    dao: &'a Dao<P>,
    depth: Depth,
    object_id: ArtifactId,
}

impl<P: RemoteProvider> Hydrator<'_, P> {
    /// Resolve a single-choice field. An absent raw value is simply unset; a
    /// present value with no matching member fails the whole read.
    pub fn single_choice<E: ChoiceEnum>(
        &self,
        record: &GenericRecord,
        field: Uuid,
    ) -> Result<Option<E>> {
        match record.get(field) {
            Some(Value::SingleChoice(raw)) => {
                let member = self
                    .dao
                    .choices
                    .resolve(&self.dao.provider, &self.dao.retry, *raw)?;
                Ok(Some(member))
            }
            _ => Ok(None),
        }
    }

    /// Resolve a multiple-choice field into a member set. Any unresolved id
    /// fails the read; no partial set is ever returned.
    pub fn multi_choice<E: ChoiceEnum>(
        &self,
        record: &GenericRecord,
        field: Uuid,
    ) -> Result<BTreeSet<E>> {
        let mut members = BTreeSet::new();
        if let Some(Value::MultiChoice(raw_ids)) = record.get(field) {
            for raw in raw_ids {
                members.insert(self.dao.choices.resolve(
                    &self.dao.provider,
                    &self.dao.retry,
                    *raw,
                )?);
            }
        }
        Ok(members)
    }

    /// Convert a file field. The name hint from the record is populated
    /// unconditionally; metadata and payload are downloaded only when the
    /// depth permits descending past this object, and are left unset
    /// together otherwise.
    pub fn file(&self, record: &GenericRecord, field: Uuid) -> Result<Option<FileField>> {
        let Some(Value::File {
            field_artifact_id,
            name_hint,
        }) = record.get(field)
        else {
            return Ok(None);
        };

        let mut file = FileField::new(*field_artifact_id);
        file.name_hint = name_hint.clone();

        if self.depth.descends() {
            let (metadata, bytes) = self
                .dao
                .retry
                .invoke(|| self.dao.provider.download_file(*field_artifact_id, self.object_id))?;
            file.metadata = Some(metadata);
            file.content = Some(FileContent::Bytes(bytes));
        }
        Ok(Some(file))
    }

    /// Convert a single-object reference field, hydrating the referenced
    /// instance at one less remaining depth when descent is permitted.
    /// Non-positive reference ids (unset or failed writes) are never
    /// followed.
    pub fn single_object<T: MappedObject>(
        &self,
        record: &GenericRecord,
        field: Uuid,
    ) -> Result<ObjectRef<T>> {
        match record.object_id(field) {
            None => Ok(ObjectRef::unset()),
            Some(id) => {
                let mut reference = ObjectRef::by_id(id);
                if id > 0 && self.depth.descends() {
                    reference.value = Some(self.dao.get_object(id, self.depth.next())?);
                }
                Ok(reference)
            }
        }
    }

    /// Convert a child-object list field. Without depth to descend, the
    /// list stays empty rather than partially populated.
    pub fn child_list<T: MappedObject>(
        &self,
        record: &GenericRecord,
        field: Uuid,
    ) -> Result<Vec<T>> {
        if !self.depth.descends() {
            return Ok(Vec::new());
        }
        record
            .object_ids(field)
            .iter()
            .filter(|id| **id > 0)
            .map(|id| self.dao.get_object(*id, self.depth.next()))
            .collect()
    }
}
