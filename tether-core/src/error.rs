/*!
Error types for the Tether core engine.
*/

use crate::record::ArtifactId;
use thiserror::Error;

/// Result type used throughout the Tether core.
pub type Result<T> = std::result::Result<T, TetherError>;

/// Errors that can occur while hydrating or persisting object graphs.
#[derive(Error, Debug)]
pub enum TetherError {
    /// I/O errors during temp-file handling for uploads
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested record does not exist remotely
    #[error("object {0} not found")]
    NotFound(ArtifactId),

    /// A raw remote choice identifier has no corresponding enum member
    #[error("choice id {raw} has no member in enum {enum_name}")]
    InvalidChoice { enum_name: &'static str, raw: i32 },

    /// The remote store accepted an insert but returned a non-positive id
    #[error("remote store rejected insert of {type_name}: returned id {returned}")]
    InsertRejected {
        type_name: &'static str,
        returned: ArtifactId,
    },

    /// An update was requested for an instance that was never inserted
    #[error("cannot update unsaved {type_name}: artifact id {artifact_id}")]
    Unsaved {
        type_name: &'static str,
        artifact_id: ArtifactId,
    },

    /// Remote provider errors (transport, query, storage)
    #[error("provider error: {0}")]
    Provider(String),

    /// Tracing subscriber initialization failures
    #[error("observability init error: {0}")]
    Observability(String),
}

impl TetherError {
    /// Create a new provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new observability error
    pub fn observability<S: Into<String>>(msg: S) -> Self {
        Self::Observability(msg.into())
    }
}
