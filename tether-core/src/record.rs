/*!
The remote store's native record representation.

A [`GenericRecord`] is how the remote store sees every entity: an integer
identifier plus a mapping from stable field GUID to an untyped [`Value`].
The hydration and persistence engines translate between this shape and
typed object graphs.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Remote object identifier. Zero means "not yet persisted"; the persistence
/// engine writes -1 into a reference field when resolving it failed.
pub type ArtifactId = i32;

/// An untyped field value as stored remotely.
///
/// Choice fields are asymmetric by design: the store hands back raw choice
/// artifact ids on read, while writes address choices by their stable member
/// GUIDs and let the store resolve them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    /// Raw single-choice artifact id (inbound)
    SingleChoice(ArtifactId),
    /// Raw multiple-choice artifact ids (inbound)
    MultiChoice(Vec<ArtifactId>),
    /// Single-choice member GUID (outbound)
    SingleChoiceGuid(Uuid),
    /// Multiple-choice member GUIDs (outbound)
    MultiChoiceGuid(Vec<Uuid>),
    /// Single-object reference by artifact id
    Object(ArtifactId),
    /// Child-object list by artifact ids
    Objects(Vec<ArtifactId>),
    /// File descriptor: the file field's own artifact id plus a short-text
    /// name hint. The binary payload never travels inline.
    File {
        field_artifact_id: ArtifactId,
        name_hint: Option<String>,
    },
}

/// Identifier plus field map, as fetched from or submitted to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericRecord {
    pub artifact_id: ArtifactId,
    pub parent_artifact_id: Option<ArtifactId>,
    pub fields: HashMap<Uuid, Value>,
}

impl GenericRecord {
    pub fn new(artifact_id: ArtifactId) -> Self {
        Self {
            artifact_id,
            parent_artifact_id: None,
            fields: HashMap::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with(mut self, field: Uuid, value: Value) -> Self {
        self.fields.insert(field, value);
        self
    }

    pub fn with_parent(mut self, parent: ArtifactId) -> Self {
        self.parent_artifact_id = Some(parent);
        self
    }

    pub fn set(&mut self, field: Uuid, value: Value) {
        self.fields.insert(field, value);
    }

    pub fn get(&self, field: Uuid) -> Option<&Value> {
        self.fields.get(&field)
    }

    pub fn text(&self, field: Uuid) -> Option<&str> {
        match self.get(field) {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn int(&self, field: Uuid) -> Option<i64> {
        match self.get(field) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn float(&self, field: Uuid) -> Option<f64> {
        match self.get(field) {
            Some(Value::Float(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn bool(&self, field: Uuid) -> Option<bool> {
        match self.get(field) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn timestamp(&self, field: Uuid) -> Option<DateTime<Utc>> {
        match self.get(field) {
            Some(Value::Timestamp(t)) => Some(*t),
            _ => None,
        }
    }

    /// Artifact id of a single-object reference field, if present.
    pub fn object_id(&self, field: Uuid) -> Option<ArtifactId> {
        match self.get(field) {
            Some(Value::Object(id)) => Some(*id),
            _ => None,
        }
    }

    /// Artifact ids of a child-object list field; empty when unset.
    pub fn object_ids(&self, field: Uuid) -> &[ArtifactId] {
        match self.get(field) {
            Some(Value::Objects(ids)) => ids,
            _ => &[],
        }
    }
}
