//! Per-document value buckets.
//!
//! An [`IndexEntry`] holds every value registered under one index key,
//! partitioned by the document that contributed it. Buckets keep the order
//! in which documents first contributed, and values keep their registration
//! order within a bucket, so iteration is deterministic and first-match
//! queries have a stable winner.

use indexmap::IndexMap;
use luals_common::DocumentId;
use rustc_hash::FxBuildHasher;

/// Values under one key, grouped by contributing document.
#[derive(Clone, Debug)]
pub struct IndexEntry<T> {
    files: IndexMap<DocumentId, Vec<T>, FxBuildHasher>,
}

impl<T> Default for IndexEntry<T> {
    fn default() -> Self {
        Self {
            files: IndexMap::default(),
        }
    }
}

impl<T> IndexEntry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the bucket of `document`.
    pub fn add(&mut self, document: DocumentId, value: T) {
        self.files.entry(document).or_default().push(value);
    }

    /// Drop the bucket of `document`, returning how many values it held.
    ///
    /// The remaining buckets keep their relative order.
    pub fn remove(&mut self, document: DocumentId) -> usize {
        self.files
            .shift_remove(&document)
            .map_or(0, |values| values.len())
    }

    pub fn contains_document(&self, document: DocumentId) -> bool {
        self.files.contains_key(&document)
    }

    /// `true` once no document has values left.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of values across all documents.
    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn document_count(&self) -> usize {
        self.files.len()
    }

    /// Contributing documents in first-contribution order.
    pub fn documents(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.files.keys().copied()
    }

    /// Values contributed by `document`, in registration order.
    pub fn values_of(&self, document: DocumentId) -> &[T] {
        self.files
            .get(&document)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every value, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.files.values().flatten()
    }
}

#[cfg(test)]
#[path = "../tests/entry_tests.rs"]
mod tests;
