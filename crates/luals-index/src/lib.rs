//! Project-wide type index for luals.
//!
//! Tracks operator overloads (`---@operator`) and type features
//! (`---@class`, `---@enum`, `---@interface`, `---@alias`) per contributing
//! document, so a document's declarations can be evicted and re-added as a
//! unit on every edit.
pub mod contributions;
pub mod entry;
pub mod shared;
pub mod type_index;

pub use contributions::DocumentContributions;
pub use entry::IndexEntry;
pub use shared::SharedTypeIndex;
pub use type_index::TypeIndex;

#[cfg(test)]
#[path = "../tests/index_law_tests.rs"]
mod index_law_tests;
