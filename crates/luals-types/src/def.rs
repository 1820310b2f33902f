//! Named type declarations and their storage.
//!
//! The declaration/binding pass owns the real declaration data. This module
//! defines the shape the type model receives through [`TypeResolver`]
//! (`NamedTypeDetail`) and a thread-safe in-memory store implementing that
//! contract, used by hosts that keep declarations in memory and by tests.
//!
//! ## Usage
//!
//! ```ignore
//! let store = DefinitionStore::new();
//! store.register(
//!     NamedTypeDetail::new("Dog", TypeFeature::Class)
//!         .with_supers(vec![LuaType::named("Animal")])
//!         .with_document(document),
//! );
//! let ctx = SearchContext::new(&store);
//! assert!(LuaType::named("Dog").sub_type_of(&LuaType::named("Animal"), &ctx));
//! ```

use crate::feature::TypeFeature;
use crate::instantiate::TypeSubstitution;
use crate::subtype::TypeResolver;
use crate::types::LuaType;
use dashmap::DashMap;
use luals_common::{DocumentId, Name, SyntaxId};
use tracing::trace;

// =============================================================================
// NamedTypeDetail
// =============================================================================

/// A field or method declared on a named type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: Name,
    pub ty: LuaType,
    pub syntax: Option<SyntaxId>,
}

impl MemberInfo {
    pub fn new(name: impl Into<Name>, ty: LuaType) -> Self {
        Self {
            name: name.into(),
            ty,
            syntax: None,
        }
    }
}

/// Full declaration of a named type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTypeDetail {
    pub name: Name,
    pub feature: TypeFeature,
    /// Generic parameter names, in declaration order (`---@class List<T>`).
    pub generic_params: Vec<Name>,
    /// Declared supertypes (`---@class Dog: Animal, Pet`).
    pub supers: Vec<LuaType>,
    pub members: Vec<MemberInfo>,
    /// Document the declaration came from.
    pub document: Option<DocumentId>,
}

impl NamedTypeDetail {
    pub fn new(name: impl Into<Name>, feature: TypeFeature) -> Self {
        Self {
            name: name.into(),
            feature,
            generic_params: Vec::new(),
            supers: Vec::new(),
            members: Vec::new(),
            document: None,
        }
    }

    pub fn with_generic_params(mut self, params: Vec<Name>) -> Self {
        self.generic_params = params;
        self
    }

    pub fn with_supers(mut self, supers: Vec<LuaType>) -> Self {
        self.supers = supers;
        self
    }

    pub fn with_members(mut self, members: Vec<MemberInfo>) -> Self {
        self.members = members;
        self
    }

    pub const fn with_document(mut self, document: DocumentId) -> Self {
        self.document = Some(document);
        self
    }

    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.iter().find(|member| &*member.name == name)
    }

    /// Substitution binding this declaration's generic parameters to `args`.
    pub fn substitution(&self, args: &[LuaType]) -> TypeSubstitution {
        TypeSubstitution::from_args(&self.generic_params, args)
    }

    /// Members with generic parameters replaced by `args`.
    ///
    /// `List<T>` with member `first: T` viewed as `List<integer>` yields
    /// `first: integer`.
    pub fn instantiate_members(&self, args: &[LuaType]) -> Vec<MemberInfo> {
        let substitution = self.substitution(args);
        self.members
            .iter()
            .map(|member| MemberInfo {
                name: member.name.clone(),
                ty: member.ty.instantiate(&substitution),
                syntax: member.syntax,
            })
            .collect()
    }
}

// =============================================================================
// DefinitionStore
// =============================================================================

/// Thread-safe storage for named type declarations, keyed by name.
///
/// Uses `DashMap` so resolver lookups from concurrent queries do not
/// serialize on one lock.
pub struct DefinitionStore {
    definitions: DashMap<Name, NamedTypeDetail>,
}

impl Default for DefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
        }
    }

    /// Register a declaration, replacing any previous one with the same name.
    pub fn register(&self, detail: NamedTypeDetail) {
        trace!(
            name = %detail.name,
            feature = %detail.feature,
            supers = detail.supers.len(),
            "DefinitionStore::register"
        );
        self.definitions.insert(detail.name.clone(), detail);
    }

    pub fn get(&self, name: &str) -> Option<NamedTypeDetail> {
        self.definitions.get(name).map(|entry| entry.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Drop every declaration that came from `document`.
    pub fn remove_document(&self, document: DocumentId) {
        self.definitions
            .retain(|_, detail| detail.document != Some(document));
        trace!(%document, "DefinitionStore::remove_document");
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn clear(&self) {
        self.definitions.clear();
    }
}

impl TypeResolver for DefinitionStore {
    fn get_supers(&self, name: &str) -> Vec<LuaType> {
        self.definitions
            .get(name)
            .map(|entry| entry.supers.clone())
            .unwrap_or_default()
    }

    fn get_detail_named_type(&self, name: &str) -> Option<NamedTypeDetail> {
        self.get(name)
    }
}

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
