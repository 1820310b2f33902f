//! Opaque identities supplied by the hosting compilation.
//!
//! The type engine never looks inside these values. A `DocumentId` names the
//! source file that contributed index entries, and a `SyntaxId` names one
//! syntax construct inside a document (an anonymous table expression, a
//! `---@type { ... }` annotation, a tuple member declaration).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared, immutable identifier string.
///
/// Type names are cloned into many type values; `Arc<str>` keeps those
/// clones allocation-free.
pub type Name = Arc<str>;

/// Identity of a source document within one compilation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub u32);

impl DocumentId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a single syntax construct.
///
/// Unique across the compilation: the owning document plus the construct's
/// position in that document's tree. Re-reading the same construct yields an
/// equal `SyntaxId`; two distinct constructs never share one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SyntaxId {
    pub document: DocumentId,
    pub index: u32,
}

impl SyntaxId {
    pub const fn new(document: DocumentId, index: u32) -> Self {
        Self { document, index }
    }
}

impl fmt::Display for SyntaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.document, self.index)
    }
}

#[cfg(test)]
#[path = "../tests/ids_tests.rs"]
mod tests;
