/*!
Declarative field metadata for mapped types.

Each mapped type exposes one static [`ObjectSchema`]: the list of declared
fields with their stable GUIDs and kinds. The engines consult the schema
instead of re-deriving structure per call; dispatch over [`FieldKind`] is a
closed set, never runtime type discovery.
*/

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of field kinds a mapped type can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain scalar (text, number, bool, timestamp)
    Scalar,
    /// Enumerated choice, at most one value
    SingleChoice,
    /// Enumerated choice, a set of values
    MultipleChoice,
    /// Binary file content plus metadata
    File,
    /// Reference to one nested object of another mapped type
    SingleObject,
    /// Ordered list of child objects written under this object as parent
    ChildList,
}

/// One declared field of a mapped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Stable field GUID, unique within the schema and shared with the
    /// record representation.
    pub guid: Uuid,
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Static schema describing one remote entity kind.
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    /// Display name of the mapped type, used in logs and errors.
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl ObjectSchema {
    pub fn field(&self, guid: Uuid) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.guid == guid)
    }

    pub fn has_file_fields(&self) -> bool {
        self.fields.iter().any(|f| f.kind == FieldKind::File)
    }

    pub fn has_child_lists(&self) -> bool {
        self.fields.iter().any(|f| f.kind == FieldKind::ChildList)
    }
}
