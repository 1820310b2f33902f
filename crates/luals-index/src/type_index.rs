//! Type index: operator overloads and type features by contributing document.
//!
//! Two independent groupings, each backed by an [`IndexEntry`]:
//!
//! | Grouping  | Key                | Values                         |
//! |-----------|--------------------|--------------------------------|
//! | operators | `TypeOperatorKind` | `TypeOperator` declarations    |
//! | features  | type name          | `TypeFeature` declarations     |
//!
//! The index changes only a whole document at a time. A reverse index
//! (document -> touched keys) makes [`TypeIndex::remove`] visit only the keys
//! a document contributed to, and keys whose entry becomes empty are deleted.
//!
//! ## Lookup policy
//!
//! Operator lookups return the first declaration whose operand types are
//! exactly equal to the query, enumerating documents in first-contribution
//! order and declarations in registration order. Feature lookups return the
//! highest-ranked feature under the index's [`FeaturePrecedence`], or
//! [`TypeFeature::Class`] when the name has no declarations.

use crate::contributions::DocumentContributions;
use crate::entry::IndexEntry;
use luals_common::{DocumentId, Name};
use luals_types::{
    BinaryOperator, FeaturePrecedence, IndexOperator, LuaType, TypeFeature, TypeOperator,
    TypeOperatorKind, UnaryOperator,
};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// Keys one document contributed to.
#[derive(Debug, Default)]
struct DocumentKeys {
    operator_kinds: FxHashSet<TypeOperatorKind>,
    feature_names: FxHashSet<Name>,
}

/// Project-wide index of operator overloads and type features.
#[derive(Debug, Default)]
pub struct TypeIndex {
    operators: FxHashMap<TypeOperatorKind, IndexEntry<TypeOperator>>,
    features: FxHashMap<Name, IndexEntry<TypeFeature>>,
    /// Reverse index: document -> keys it touched
    contributions: FxHashMap<DocumentId, DocumentKeys>,
    precedence: FeaturePrecedence,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index that resolves features with `precedence`.
    pub fn with_precedence(precedence: FeaturePrecedence) -> Self {
        Self {
            precedence,
            ..Self::default()
        }
    }

    pub fn precedence(&self) -> FeaturePrecedence {
        self.precedence
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Register `operator` under its kind, attributed to `document`.
    ///
    /// Several operators of the same kind from the same document form an
    /// overload set; all are kept.
    pub fn add_type_operator(&mut self, document: DocumentId, operator: TypeOperator) {
        let kind = operator.kind();
        trace!(%document, %kind, "add type operator");
        self.operators.entry(kind).or_default().add(document, operator);
        self.contributions
            .entry(document)
            .or_default()
            .operator_kinds
            .insert(kind);
    }

    /// Register `feature` for the type `name`, attributed to `document`.
    pub fn add_feature(&mut self, document: DocumentId, name: impl Into<Name>, feature: TypeFeature) {
        let name = name.into();
        trace!(%document, %name, %feature, "add type feature");
        self.features
            .entry(name.clone())
            .or_default()
            .add(document, feature);
        self.contributions
            .entry(document)
            .or_default()
            .feature_names
            .insert(name);
    }

    /// Register a whole batch for `document`, in batch order.
    pub fn add_contributions(&mut self, document: DocumentId, contributions: DocumentContributions) {
        let DocumentContributions {
            operators,
            features,
        } = contributions;
        for operator in operators {
            self.add_type_operator(document, operator);
        }
        for (name, feature) in features {
            self.add_feature(document, name, feature);
        }
    }

    /// Evict everything `document` contributed.
    ///
    /// Keys left without values are deleted. Removing a document with no
    /// contributions is a no-op.
    pub fn remove(&mut self, document: DocumentId) {
        let Some(keys) = self.contributions.remove(&document) else {
            trace!(%document, "remove: no contributions");
            return;
        };

        let mut removed = 0;
        for kind in keys.operator_kinds {
            if let Some(entry) = self.operators.get_mut(&kind) {
                removed += entry.remove(document);
                if entry.is_empty() {
                    self.operators.remove(&kind);
                }
            }
        }
        for name in keys.feature_names {
            if let Some(entry) = self.features.get_mut(&name) {
                removed += entry.remove(document);
                if entry.is_empty() {
                    self.features.remove(&name);
                }
            }
        }

        debug!(%document, removed, "removed document contributions");
    }

    /// Replace `document`'s contributions with `contributions`.
    pub fn replace_document(&mut self, document: DocumentId, contributions: DocumentContributions) {
        self.remove(document);
        self.add_contributions(document, contributions);
    }

    pub fn clear(&mut self) {
        self.operators.clear();
        self.features.clear();
        self.contributions.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// First binary operator of `kind` declared for exactly `(left, right)`.
    pub fn get_best_matched_binary_operator(
        &self,
        kind: TypeOperatorKind,
        left: &LuaType,
        right: &LuaType,
    ) -> Option<&BinaryOperator> {
        self.operators(kind)
            .filter_map(TypeOperator::as_binary)
            .find(|op| op.left == *left && op.right == *right)
    }

    /// First unary operator of `kind` declared for exactly `operand`.
    pub fn get_best_matched_unary_operator(
        &self,
        kind: TypeOperatorKind,
        operand: &LuaType,
    ) -> Option<&UnaryOperator> {
        self.operators(kind)
            .filter_map(TypeOperator::as_unary)
            .find(|op| op.operand == *operand)
    }

    /// First index operator declared for exactly `(container, key)`.
    pub fn get_best_matched_index_operator(
        &self,
        container: &LuaType,
        key: &LuaType,
    ) -> Option<&IndexOperator> {
        self.operators(TypeOperatorKind::Index)
            .filter_map(TypeOperator::as_index)
            .find(|op| op.container == *container && op.key == *key)
    }

    /// Winning feature for `name`; `Class` when nothing declares it.
    pub fn get_feature(&self, name: &str) -> TypeFeature {
        self.precedence
            .max(self.features_of(name))
            .unwrap_or_default()
    }

    /// Operators registered under `kind`, in lookup order.
    pub fn operators(&self, kind: TypeOperatorKind) -> impl Iterator<Item = &TypeOperator> + '_ {
        self.operators.get(&kind).into_iter().flat_map(IndexEntry::iter)
    }

    /// Features declared for `name`, in lookup order.
    pub fn features_of(&self, name: &str) -> impl Iterator<Item = TypeFeature> + '_ {
        self.features
            .get(name)
            .into_iter()
            .flat_map(IndexEntry::iter)
            .copied()
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn contains_document(&self, document: DocumentId) -> bool {
        self.contributions.contains_key(&document)
    }

    /// Number of operator kinds with at least one declaration.
    pub fn operator_kind_count(&self) -> usize {
        self.operators.len()
    }

    /// Number of type names with at least one feature declaration.
    pub fn feature_name_count(&self) -> usize {
        self.features.len()
    }

    pub fn document_count(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty() && self.features.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/type_index_tests.rs"]
mod tests;
