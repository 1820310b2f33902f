//! Generic type instantiation.
//!
//! Replaces generic parameter placeholders with concrete types:
//!
//! - `Named` / `Expand`: replaced when the identifier is bound. An `Expand`
//!   only takes a multi-return replacement and is left alone otherwise.
//! - `Generic`: the base identifier is renamed when bound to a named type;
//!   every argument is instantiated.
//! - `Union`, `Array`, `Variadic`, `MultiReturn`: rebuilt from instantiated
//!   parts.
//! - `Tuple`: every member is instantiated, then a trailing multi-return
//!   member is spliced into one member per element.
//! - Anything else is returned unchanged.
//!
//! The multi-return splice is how a trailing call result flattens into a
//! tuple: `[integer, T...]` with `T := (string, boolean)` becomes
//! `[integer, string, boolean]`.

use crate::types::{GenericType, LuaType, MultiReturn, TupleMember, TupleType, UnionType};
use luals_common::Name;
use rustc_hash::FxHashMap;
use std::sync::Arc;

// =============================================================================
// TypeSubstitution
// =============================================================================

/// Mapping from generic parameter name to replacement type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeSubstitution {
    map: FxHashMap<Name, LuaType>,
}

impl TypeSubstitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `params[i]` to `args[i]`.
    ///
    /// Parameters without an argument stay unbound; extra arguments are ignored.
    pub fn from_args(params: &[Name], args: &[LuaType]) -> Self {
        params
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<Name>, ty: LuaType) {
        self.map.insert(name.into(), ty);
    }

    pub fn get(&self, name: &str) -> Option<&LuaType> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(Name, LuaType)> for TypeSubstitution {
    fn from_iter<I: IntoIterator<Item = (Name, LuaType)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Instantiation
// =============================================================================

/// Instantiate `ty` under `substitution`.
pub fn instantiate_type(ty: &LuaType, substitution: &TypeSubstitution) -> LuaType {
    match ty {
        LuaType::Named(name) => substitution.get(name).cloned().unwrap_or_else(|| ty.clone()),
        LuaType::Expand(name) => match substitution.get(name) {
            Some(replacement @ LuaType::MultiReturn(_)) => replacement.clone(),
            _ => ty.clone(),
        },
        LuaType::Generic(generic) => LuaType::Generic(instantiate_generic(generic, substitution)),
        LuaType::Union(union) => LuaType::Union(UnionType::new(
            union
                .members()
                .iter()
                .map(|member| instantiate_type(member, substitution)),
        )),
        LuaType::Tuple(tuple) => LuaType::Tuple(instantiate_tuple(tuple, substitution)),
        LuaType::Array(element) => LuaType::Array(Arc::new(instantiate_type(element, substitution))),
        LuaType::Variadic(element) => {
            LuaType::Variadic(Arc::new(instantiate_type(element, substitution)))
        }
        LuaType::MultiReturn(multi) => {
            LuaType::MultiReturn(instantiate_multi_return(multi, substitution))
        }
        LuaType::Any
        | LuaType::Unknown
        | LuaType::Nil
        | LuaType::StringLiteral(_)
        | LuaType::IntegerLiteral(_)
        | LuaType::TableLiteral(_)
        | LuaType::DocTable(_) => ty.clone(),
    }
}

fn instantiate_generic(generic: &GenericType, substitution: &TypeSubstitution) -> GenericType {
    let name = substitution
        .get(&generic.name)
        .and_then(LuaType::as_named)
        .unwrap_or(&generic.name)
        .clone();
    let args = generic
        .args
        .iter()
        .map(|arg| instantiate_type(arg, substitution))
        .collect();
    GenericType { name, args }
}

fn instantiate_multi_return(multi: &MultiReturn, substitution: &TypeSubstitution) -> MultiReturn {
    match multi {
        MultiReturn::List(types) => MultiReturn::List(
            types
                .iter()
                .map(|ty| instantiate_type(ty, substitution))
                .collect(),
        ),
        MultiReturn::Repeat(base) => {
            MultiReturn::Repeat(Arc::new(instantiate_type(base, substitution)))
        }
    }
}

fn instantiate_tuple(tuple: &TupleType, substitution: &TypeSubstitution) -> TupleType {
    let mut members: Vec<TupleMember> = tuple
        .members()
        .iter()
        .map(|member| TupleMember {
            index: member.index,
            ty: instantiate_type(&member.ty, substitution),
            syntax: member.syntax,
        })
        .collect();

    // Splice after all members are instantiated, never before.
    let splice = matches!(
        members.last(),
        Some(TupleMember {
            ty: LuaType::MultiReturn(_),
            ..
        })
    );
    if splice {
        if let Some(TupleMember {
            index,
            ty: LuaType::MultiReturn(multi),
            syntax,
        }) = members.pop()
        {
            members.extend((0..multi.element_count()).map(|offset| TupleMember {
                index: index + offset,
                ty: multi.element_type(offset),
                syntax,
            }));
        }
    }

    TupleType::new(members)
}

impl LuaType {
    /// Replace generic parameters bound in `substitution`.
    pub fn instantiate(&self, substitution: &TypeSubstitution) -> LuaType {
        instantiate_type(self, substitution)
    }
}

#[cfg(test)]
#[path = "../tests/instantiate_tests.rs"]
mod tests;
