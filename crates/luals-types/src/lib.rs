//! Lua Static Type Model
//!
//! Values describing static Lua types and the operations the analyzer runs
//! on them:
//!
//! - **Type values** (`LuaType`): immutable, structurally compared, cheap to
//!   clone and share across threads
//! - **Subtyping**: `sub_type_of` with a cycle-safe supertype walk
//! - **Instantiation**: generic parameter substitution with multi-return
//!   splicing into tuples
//! - **Declarations**: features (`class`/`enum`/`interface`/`alias`),
//!   operator declarations, and the resolver contract the project index
//!   implements
//!
//! Anything needing declarations goes through a [`SearchContext`], which
//! carries the [`TypeResolver`] and the recursion limits for one query.
pub mod def;
pub mod feature;
mod format;
pub mod instantiate;
pub mod operator;
pub mod recursion;
pub mod subtype;
pub mod types;

pub use def::{DefinitionStore, MemberInfo, NamedTypeDetail};
pub use feature::{FeaturePrecedence, TypeFeature};
pub use instantiate::{TypeSubstitution, instantiate_type};
pub use operator::{BinaryOperator, IndexOperator, TypeOperator, TypeOperatorKind, UnaryOperator};
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};
pub use subtype::{NoopResolver, SearchContext, SubtypeChecker, TypeResolver, is_subtype_of};
pub use types::{
    GenericType, LuaType, MultiReturn, TupleMember, TupleType, TypeKind, UnionType, builtin,
};

#[cfg(test)]
#[path = "../tests/type_law_tests.rs"]
mod type_law_tests;
