/*!
# Tether Core Engine

Bidirectional mapping between strongly-typed object graphs and the generic
records of a remote, schema-flexible object store.

The remote store sees every entity as an integer identifier plus a map from
stable field GUID to an untyped value. This crate translates that shape to
and from rich typed objects:

- **Hydration**: fetch a record and build a typed instance, resolving
  enumerated choice fields against remotely defined legal values, following
  single-object references and child lists to a bounded depth, and
  retrieving file content when the depth asks for it.
- **Persistence**: write a typed graph as one or more record creates and
  updates, inserting unsaved references first, propagating assigned
  identifiers down to children, and uploading binary file payloads.

Every remote call goes through the fixed-interval retry policy from
`tether-retry`; choice metadata is cached per enumeration type for the life
of the [`Dao`].

## Usage

```rust,ignore
use tether_core::{Dao, Depth};

let dao = Dao::new(provider);

// Read a graph two levels deep.
let order: Order = dao.get_object(order_id, Depth::Levels(2))?;

// Write a freshly built graph; ids are stamped back onto the instances.
let mut order = Order::default();
let order_id = dao.insert_object(&mut order)?;
```

Mapped types implement [`MappedObject`] against a static [`ObjectSchema`];
choice enums implement [`ChoiceEnum`]. The remote store itself stays behind
the [`RemoteProvider`] trait and is injected by the caller.
*/

pub mod choice;
pub mod dao;
pub mod depth;
pub mod error;
pub mod file;
pub mod object;
pub mod observability;
pub mod provider;
pub mod record;
pub mod schema;

pub use choice::{ChoiceCache, ChoiceEnum};
pub use dao::{Dao, Hydrator, Persister};
pub use depth::Depth;
pub use error::{Result, TetherError};
pub use file::{FileContent, FileField, FileMetadata};
pub use object::{MappedObject, ObjectRef, FAILED_REFERENCE};
pub use provider::{ChoiceQuery, RemoteProvider};
pub use record::{ArtifactId, GenericRecord, Value};
pub use schema::{FieldDef, FieldKind, ObjectSchema};
pub use tether_retry::RetryPolicy;
