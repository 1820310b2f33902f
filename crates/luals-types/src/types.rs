//! Lua type values.
//!
//! `LuaType` is a closed sum type with one variant per kind of static type.
//! Values are immutable and compared structurally: two values are equal iff
//! they have the same variant and equal attributes. Children are held behind
//! `Arc`, so cloning a type is cheap and values can be shared freely across
//! threads.
//!
//! | Variant | Attributes | Equality |
//! |---------|-----------|----------|
//! | `Named` | identifier | by identifier |
//! | `Union` | member set | unordered set |
//! | `Tuple` | ordered members | member types, in order |
//! | `Array` | element | element |
//! | `Generic` | identifier + arguments | identifier and arguments |
//! | `StringLiteral` / `IntegerLiteral` | value | value |
//! | `TableLiteral` / `DocTable` | source construct | construct identity |
//! | `Variadic` | element | element |
//! | `Expand` | identifier | by identifier |
//! | `MultiReturn` | list or repeating base | structural |

use luals_common::{Name, SyntaxId};
use rustc_hash::{FxHashSet, FxHasher};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Names of the builtin scalar types. These are ordinary `Named` values.
pub mod builtin {
    pub const BOOLEAN: &str = "boolean";
    pub const INTEGER: &str = "integer";
    pub const NUMBER: &str = "number";
    pub const STRING: &str = "string";
    pub const TABLE: &str = "table";
    pub const FUNCTION: &str = "function";
    pub const THREAD: &str = "thread";
    pub const USERDATA: &str = "userdata";
}

// =============================================================================
// TypeKind
// =============================================================================

/// Variant tag of a [`LuaType`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Any,
    Unknown,
    Nil,
    Named,
    Union,
    Tuple,
    Array,
    Generic,
    StringLiteral,
    IntegerLiteral,
    TableLiteral,
    DocTable,
    Variadic,
    Expand,
    MultiReturn,
}

// =============================================================================
// LuaType
// =============================================================================

/// A static Lua type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LuaType {
    /// Top type; accepts every value.
    Any,
    /// Top type produced when inference gives up.
    Unknown,
    Nil,
    /// A declared type identified by name (`---@class Foo`, `integer`, ...).
    Named(Name),
    Union(UnionType),
    Tuple(TupleType),
    /// `T[]`
    Array(Arc<LuaType>),
    /// `Foo<A, B>`
    Generic(GenericType),
    StringLiteral(Name),
    IntegerLiteral(i64),
    /// Anonymous table expression `{ ... }`, identified by its source construct.
    TableLiteral(SyntaxId),
    /// Table type written in an annotation (`---@type { x: integer }`).
    DocTable(SyntaxId),
    /// `...T`
    Variadic(Arc<LuaType>),
    /// Placeholder that becomes a multi-return on instantiation (`T...`).
    Expand(Name),
    /// The values returned by a call.
    MultiReturn(MultiReturn),
}

impl LuaType {
    pub fn named(name: impl Into<Name>) -> Self {
        Self::Named(name.into())
    }

    pub fn union(members: impl IntoIterator<Item = LuaType>) -> Self {
        Self::Union(UnionType::new(members))
    }

    pub fn tuple(members: Vec<TupleMember>) -> Self {
        Self::Tuple(TupleType::new(members))
    }

    /// Tuple whose members are indexed `0..n` with no source references.
    pub fn tuple_of(types: impl IntoIterator<Item = LuaType>) -> Self {
        Self::Tuple(TupleType::from_types(types))
    }

    pub fn array(element: LuaType) -> Self {
        Self::Array(Arc::new(element))
    }

    pub fn generic(name: impl Into<Name>, args: impl IntoIterator<Item = LuaType>) -> Self {
        Self::Generic(GenericType::new(name, args))
    }

    pub fn string_literal(content: impl Into<Name>) -> Self {
        Self::StringLiteral(content.into())
    }

    pub fn integer_literal(value: i64) -> Self {
        Self::IntegerLiteral(value)
    }

    pub fn table_literal(syntax: SyntaxId) -> Self {
        Self::TableLiteral(syntax)
    }

    pub fn doc_table(syntax: SyntaxId) -> Self {
        Self::DocTable(syntax)
    }

    pub fn variadic(element: LuaType) -> Self {
        Self::Variadic(Arc::new(element))
    }

    pub fn expand(name: impl Into<Name>) -> Self {
        Self::Expand(name.into())
    }

    pub fn multi_return(types: impl IntoIterator<Item = LuaType>) -> Self {
        Self::MultiReturn(MultiReturn::List(types.into_iter().collect()))
    }

    /// Multi-return repeating `base` for every position (`T...` as a return).
    pub fn multi_return_repeat(base: LuaType) -> Self {
        Self::MultiReturn(MultiReturn::Repeat(Arc::new(base)))
    }

    pub fn boolean() -> Self {
        Self::named(builtin::BOOLEAN)
    }

    pub fn integer() -> Self {
        Self::named(builtin::INTEGER)
    }

    pub fn number() -> Self {
        Self::named(builtin::NUMBER)
    }

    pub fn string() -> Self {
        Self::named(builtin::STRING)
    }

    pub fn table() -> Self {
        Self::named(builtin::TABLE)
    }

    pub fn function() -> Self {
        Self::named(builtin::FUNCTION)
    }

    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Any => TypeKind::Any,
            Self::Unknown => TypeKind::Unknown,
            Self::Nil => TypeKind::Nil,
            Self::Named(_) => TypeKind::Named,
            Self::Union(_) => TypeKind::Union,
            Self::Tuple(_) => TypeKind::Tuple,
            Self::Array(_) => TypeKind::Array,
            Self::Generic(_) => TypeKind::Generic,
            Self::StringLiteral(_) => TypeKind::StringLiteral,
            Self::IntegerLiteral(_) => TypeKind::IntegerLiteral,
            Self::TableLiteral(_) => TypeKind::TableLiteral,
            Self::DocTable(_) => TypeKind::DocTable,
            Self::Variadic(_) => TypeKind::Variadic,
            Self::Expand(_) => TypeKind::Expand,
            Self::MultiReturn(_) => TypeKind::MultiReturn,
        }
    }

    /// `true` for `Any` and `Unknown`, the types every value is a subtype of.
    pub const fn is_top(&self) -> bool {
        matches!(self, Self::Any | Self::Unknown)
    }

    /// View this type as a named type.
    ///
    /// Returns the identifier of `Named` values and the base identifier of
    /// `Generic` values. This is the explicit replacement for treating a
    /// generic as "a named type with arguments".
    pub fn as_named(&self) -> Option<&Name> {
        match self {
            Self::Named(name) => Some(name),
            Self::Generic(generic) => Some(&generic.name),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(union) => Some(union),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&TupleType> {
        match self {
            Self::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn as_multi_return(&self) -> Option<&MultiReturn> {
        match self {
            Self::MultiReturn(multi) => Some(multi),
            _ => None,
        }
    }
}

// =============================================================================
// UnionType
// =============================================================================

/// Set of member types.
///
/// Construction drops duplicates and keeps first-occurrence order for
/// iteration. Equality and hashing ignore order.
#[derive(Clone, Debug)]
pub struct UnionType {
    members: Arc<[LuaType]>,
}

impl UnionType {
    pub fn new(members: impl IntoIterator<Item = LuaType>) -> Self {
        let mut seen = FxHashSet::default();
        let members: Vec<LuaType> = members
            .into_iter()
            .filter(|member| seen.insert(member.clone()))
            .collect();
        Self {
            members: members.into(),
        }
    }

    pub fn members(&self) -> &[LuaType] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, ty: &LuaType) -> bool {
        self.members.contains(ty)
    }
}

impl PartialEq for UnionType {
    fn eq(&self, other: &Self) -> bool {
        // Members are deduplicated, so equal length plus inclusion is set equality.
        self.members.len() == other.members.len()
            && self.members.iter().all(|member| other.contains(member))
    }
}

impl Eq for UnionType {}

impl Hash for UnionType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative combination keeps the hash independent of member order.
        let combined = self.members.iter().fold(0u64, |acc, member| {
            let mut hasher = FxHasher::default();
            member.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        self.members.len().hash(state);
        combined.hash(state);
    }
}

// =============================================================================
// TupleType
// =============================================================================

/// One positional member of a tuple.
#[derive(Clone, Debug)]
pub struct TupleMember {
    pub index: usize,
    pub ty: LuaType,
    /// The syntax that declared this member, if any.
    pub syntax: Option<SyntaxId>,
}

impl TupleMember {
    pub fn new(index: usize, ty: LuaType) -> Self {
        Self {
            index,
            ty,
            syntax: None,
        }
    }

    pub fn with_syntax(mut self, syntax: SyntaxId) -> Self {
        self.syntax = Some(syntax);
        self
    }
}

/// Ordered list of tuple members.
///
/// Identity is the ordered sequence of member types; indices and source
/// references are metadata and do not take part in equality.
#[derive(Clone, Debug)]
pub struct TupleType {
    members: Arc<[TupleMember]>,
}

impl TupleType {
    pub fn new(members: Vec<TupleMember>) -> Self {
        Self {
            members: members.into(),
        }
    }

    pub fn from_types(types: impl IntoIterator<Item = LuaType>) -> Self {
        Self::new(
            types
                .into_iter()
                .enumerate()
                .map(|(index, ty)| TupleMember::new(index, ty))
                .collect(),
        )
    }

    pub fn members(&self) -> &[TupleMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn types(&self) -> impl Iterator<Item = &LuaType> {
        self.members.iter().map(|member| &member.ty)
    }
}

impl PartialEq for TupleType {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len() && self.types().eq(other.types())
    }
}

impl Eq for TupleType {}

impl Hash for TupleType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.members.len().hash(state);
        for ty in self.types() {
            ty.hash(state);
        }
    }
}

// =============================================================================
// GenericType
// =============================================================================

/// A named type applied to type arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericType {
    pub name: Name,
    pub args: Arc<[LuaType]>,
}

impl GenericType {
    pub fn new(name: impl Into<Name>, args: impl IntoIterator<Item = LuaType>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }
}

// =============================================================================
// MultiReturn
// =============================================================================

/// Values produced by a call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MultiReturn {
    /// A fixed, ordered list of result types.
    List(Arc<[LuaType]>),
    /// An unbounded sequence of one repeating type.
    Repeat(Arc<LuaType>),
}

impl MultiReturn {
    /// Number of explicitly listed results. Zero for the repeating form.
    pub fn element_count(&self) -> usize {
        match self {
            Self::List(types) => types.len(),
            Self::Repeat(_) => 0,
        }
    }

    /// Type of the result at position `index`.
    ///
    /// Out-of-range positions of a list yield `Nil`; the repeating form yields
    /// its base at every position.
    pub fn element_type(&self, index: usize) -> LuaType {
        match self {
            Self::List(types) => types.get(index).cloned().unwrap_or(LuaType::Nil),
            Self::Repeat(base) => (**base).clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
