/*!
The persistence engine: typed object graph to record writes.

Insertion order matters: single-object references are resolved before the
owning record is written so their identifiers land in it, and child lists
are written after so they can carry the new identifier as parent. Root
failures are fatal; nested reference failures degrade to the -1 sentinel so
one bad branch does not lose the whole graph.
*/

use super::Dao;
use crate::error::{Result, TetherError};
use crate::file::{FileContent, FileField};
use crate::object::{MappedObject, ObjectRef, FAILED_REFERENCE};
use crate::provider::RemoteProvider;
use crate::record::{ArtifactId, GenericRecord};
use std::env;
use std::fs;
use tracing::{debug, warn};
use uuid::Uuid;

impl<P: RemoteProvider> Dao<P> {
    /// Insert a typed object and everything it declares: references first,
    /// then the record itself, then file payloads and child lists under the
    /// newly assigned identifier, which is stamped back onto the instance
    /// and returned.
    pub fn insert_object<T: MappedObject>(&self, object: &mut T) -> Result<ArtifactId> {
        let cx = Persister { dao: self };

        object.persist_references(&cx)?;

        let artifact_id = self.insert_record(T::schema().name, &object.to_record())?;
        object.set_artifact_id(artifact_id);

        object.persist_files(&cx, artifact_id)?;
        object.persist_children(&cx, artifact_id)?;

        Ok(artifact_id)
    }

    /// Update an already-persisted object's record and re-upload its file
    /// payloads. Instances without a positive identifier have nothing
    /// remote to update and are refused.
    pub fn update_object<T: MappedObject>(&self, object: &T) -> Result<()> {
        if object.artifact_id() <= 0 {
            return Err(TetherError::Unsaved {
                type_name: T::schema().name,
                artifact_id: object.artifact_id(),
            });
        }
        let record = object.to_record();
        self.retry.invoke(|| self.provider.update(&record))?;

        let cx = Persister { dao: self };
        object.persist_files(&cx, object.artifact_id())
    }

    /// Insert a list of children under `parent_id`.
    ///
    /// Each child gets the parent identifier stamped and its own identifier
    /// zeroed first. Leaf-shaped children (no child lists, no file fields)
    /// go to the store as one batch create; anything with nested structure
    /// falls back to the full one-at-a-time insert path.
    pub fn insert_child_list<T: MappedObject>(
        &self,
        children: &mut [T],
        parent_id: ArtifactId,
    ) -> Result<()> {
        if children.is_empty() {
            return Ok(());
        }

        for child in children.iter_mut() {
            child.set_parent_artifact_id(parent_id);
            child.set_artifact_id(0);
        }

        let schema = T::schema();
        if schema.has_child_lists() || schema.has_file_fields() {
            for child in children.iter_mut() {
                self.insert_object(child)?;
            }
        } else {
            let records: Vec<GenericRecord> =
                children.iter().map(MappedObject::to_record).collect();
            let ids = self.retry.invoke(|| self.provider.create(&records))?;
            if ids.len() != records.len() {
                // A short id list would leave some created children marked unsaved.
                return Err(TetherError::provider(format!(
                    "batch create of {} returned {} ids for {} records",
                    schema.name,
                    ids.len(),
                    records.len()
                )));
            }
            debug!(
                type_name = schema.name,
                parent_id,
                count = records.len(),
                "batch-inserted child list"
            );
            for (child, id) in children.iter_mut().zip(ids) {
                child.set_artifact_id(id);
            }
        }
        Ok(())
    }

    fn insert_record(&self, type_name: &'static str, record: &GenericRecord) -> Result<ArtifactId> {
        let returned = self.retry.invoke(|| self.provider.create_single(record))?;
        if returned <= 0 {
            // The store signalled rejection without raising an error.
            return Err(TetherError::InsertRejected {
                type_name,
                returned,
            });
        }
        debug!(type_name, artifact_id = returned, "inserted record");
        Ok(returned)
    }
}

/// Per-write context handed to the `persist_*` hooks of [`MappedObject`].
pub struct Persister<'a, P: RemoteProvider> {
    dao: &'a Dao<P>,
}

impl<P: RemoteProvider> Persister<'_, P> {
    /// Resolve one single-object reference before the owning record is
    /// written: unsaved instances are inserted and their new identifier
    /// stamped into the reference, saved ones are updated in place. A
    /// failure stamps the -1 sentinel instead of aborting the owning
    /// insert, so one bad reference does not block the rest of the graph.
    pub fn save_reference<T: MappedObject>(&self, reference: &mut ObjectRef<T>) {
        let Some(nested) = reference.value.as_mut() else {
            return;
        };

        let outcome = if nested.artifact_id() == 0 {
            self.dao.insert_object(nested)
        } else {
            self.dao.update_object(nested).map(|()| nested.artifact_id())
        };

        match outcome {
            Ok(artifact_id) => reference.artifact_id = artifact_id,
            Err(err) => {
                warn!(
                    type_name = T::schema().name,
                    error = %err,
                    "nested reference write failed; stamping sentinel"
                );
                reference.artifact_id = FAILED_REFERENCE;
            }
        }
    }

    /// Upload one file field's payload against `object_id`. Disk-backed
    /// payloads upload straight from their path; buffer-backed payloads are
    /// materialized to a temp file first, and the temp file is deleted
    /// through the retry policy whether or not the upload succeeded.
    pub fn upload_file(&self, file: Option<&FileField>, object_id: ArtifactId) -> Result<()> {
        let Some(file) = file else {
            return Ok(());
        };
        let Some(content) = &file.content else {
            return Ok(());
        };

        match content {
            FileContent::Path(path) => self.dao.retry.invoke(|| {
                self.dao
                    .provider
                    .upload_file(file.field_artifact_id, object_id, path)
            }),
            FileContent::Bytes(bytes) => {
                let Some(file_name) = file
                    .metadata
                    .as_ref()
                    .map(|m| m.file_name.as_str())
                    .filter(|name| !name.is_empty())
                else {
                    // Nothing to name the materialized file after.
                    return Ok(());
                };

                let temp_path = env::temp_dir().join(format!("{}-{}", Uuid::new_v4(), file_name));
                fs::write(&temp_path, bytes)?;

                let uploaded = self.dao.retry.invoke(|| {
                    self.dao
                        .provider
                        .upload_file(file.field_artifact_id, object_id, &temp_path)
                });
                let cleaned = self
                    .dao
                    .retry
                    .invoke(|| fs::remove_file(&temp_path).map_err(TetherError::from));

                uploaded?;
                cleaned
            }
        }
    }

    /// Insert a child list under `parent_id`.
    pub fn insert_children<T: MappedObject>(
        &self,
        children: &mut [T],
        parent_id: ArtifactId,
    ) -> Result<()> {
        self.dao.insert_child_list(children, parent_id)
    }
}
