/*!
Read-depth bound for object hydration.
*/

use serde::{Deserialize, Serialize};

/// How far a read descends into reference and child-list fields, and whether
/// file content is retrieved for the object at each level.
///
/// Each descent hands the nested read a depth with one less remaining level,
/// so a `FirstLevel` read downloads file content for the root but not for the
/// objects one level down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Depth {
    /// Root object only: no descent, no file content.
    OnlyRoot,
    /// Root plus one level of references/children; file content for the root.
    FirstLevel,
    /// Arbitrary number of remaining levels.
    Levels(u32),
    /// Follow references without bound.
    Full,
}

impl Depth {
    /// Whether this depth permits descending past the current object.
    pub fn descends(self) -> bool {
        match self {
            Depth::OnlyRoot | Depth::Levels(0) => false,
            Depth::FirstLevel | Depth::Full => true,
            Depth::Levels(n) => n > 0,
        }
    }

    /// The depth handed to nested reads, one level shallower.
    pub fn next(self) -> Depth {
        match self {
            Depth::OnlyRoot | Depth::Levels(0) => Depth::OnlyRoot,
            Depth::FirstLevel | Depth::Levels(1) => Depth::OnlyRoot,
            Depth::Levels(n) => Depth::Levels(n - 1),
            Depth::Full => Depth::Full,
        }
    }
}
