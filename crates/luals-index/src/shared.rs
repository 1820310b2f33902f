//! Thread-safe handle over a [`TypeIndex`].
//!
//! Writers take the lock once per document edit: [`SharedTypeIndex::replace_document`]
//! removes the old contributions and adds the new ones under a single write
//! guard, so concurrent readers see either the pre-edit or the post-edit state
//! of a document and never a mix. Queries return owned values so no guard
//! outlives the call.

use crate::contributions::DocumentContributions;
use crate::type_index::TypeIndex;
use luals_common::DocumentId;
use luals_types::{
    BinaryOperator, IndexOperator, LuaType, TypeFeature, TypeOperatorKind, UnaryOperator,
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// `RwLock`-guarded [`TypeIndex`] shared between the indexing stage and queries.
#[derive(Debug, Default)]
pub struct SharedTypeIndex {
    inner: RwLock<TypeIndex>,
}

impl SharedTypeIndex {
    pub fn new(index: TypeIndex) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    // Poisoned locks are recovered.
    fn read_guard(&self) -> RwLockReadGuard<'_, TypeIndex> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, TypeIndex> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap `document`'s contributions for `contributions` atomically.
    pub fn replace_document(&self, document: DocumentId, contributions: DocumentContributions) {
        self.write_guard().replace_document(document, contributions);
    }

    pub fn remove_document(&self, document: DocumentId) {
        self.write_guard().remove(document);
    }

    /// Run `f` against a consistent snapshot of the index.
    pub fn with_index<R>(&self, f: impl FnOnce(&TypeIndex) -> R) -> R {
        f(&self.read_guard())
    }

    /// Run `f` with exclusive access to the index.
    pub fn with_index_mut<R>(&self, f: impl FnOnce(&mut TypeIndex) -> R) -> R {
        f(&mut self.write_guard())
    }

    pub fn get_best_matched_binary_operator(
        &self,
        kind: TypeOperatorKind,
        left: &LuaType,
        right: &LuaType,
    ) -> Option<BinaryOperator> {
        self.read_guard()
            .get_best_matched_binary_operator(kind, left, right)
            .cloned()
    }

    pub fn get_best_matched_unary_operator(
        &self,
        kind: TypeOperatorKind,
        operand: &LuaType,
    ) -> Option<UnaryOperator> {
        self.read_guard()
            .get_best_matched_unary_operator(kind, operand)
            .cloned()
    }

    pub fn get_best_matched_index_operator(
        &self,
        container: &LuaType,
        key: &LuaType,
    ) -> Option<IndexOperator> {
        self.read_guard()
            .get_best_matched_index_operator(container, key)
            .cloned()
    }

    pub fn get_feature(&self, name: &str) -> TypeFeature {
        self.read_guard().get_feature(name)
    }

    pub fn contains_document(&self, document: DocumentId) -> bool {
        self.read_guard().contains_document(document)
    }

    /// Take the index back out.
    pub fn into_inner(self) -> TypeIndex {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<TypeIndex> for SharedTypeIndex {
    fn from(index: TypeIndex) -> Self {
        Self::new(index)
    }
}

#[cfg(test)]
#[path = "../tests/shared_tests.rs"]
mod tests;
