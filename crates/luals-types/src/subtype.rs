//! Subtype checking.
//!
//! `source <: target` rules, in the order they are tried:
//!
//! 1. `Any` and `Unknown` as target accept every source.
//! 2. Equal values are subtypes of each other.
//! 3. By source variant:
//!    - `Named` / `Generic`: the named view matches the target (see below), or
//!      some declared supertype (from the [`TypeResolver`]) is a subtype of
//!      the target. The walk is transitive.
//!    - `Union`: the target must be a union and every source member must be
//!      a subtype of some target member.
//!    - `Tuple`: the target must be a tuple of the same arity with each
//!      source member a subtype of the target member at the same position.
//!    - `Array`: covariant in the element type.
//!    - everything else (literals included): equality only.
//!
//! Named view: a `Named` and a `Generic` with the same identifier match in
//! either direction, so `List` and `List<integer>` are interchangeable. Two
//! generics with the same base and different arguments do not match.
//!
//! The supertype walk is the only real recursion. Declarations come from user
//! code and may be cyclic (`---@class A: B`, `---@class B: A`) or share
//! ancestors, so every walk goes through a [`RecursionGuard`] keyed by type
//! name. A walk has one target, so a name already visited in it cannot lead
//! anywhere new and contributes no further supertypes. Each name is expanded
//! at most once per walk. Hitting the depth or iteration limit answers
//! `false` and is reported by [`SubtypeChecker::depth_exceeded`].

use crate::def::NamedTypeDetail;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::types::LuaType;
use luals_common::Name;
use tracing::{debug, trace};

// =============================================================================
// Resolver contract
// =============================================================================

/// Declaration lookups the type model needs from the project index.
pub trait TypeResolver {
    /// Declared supertypes of `name`; empty if it has none or is unknown.
    fn get_supers(&self, name: &str) -> Vec<LuaType>;

    /// Full declaration of `name`.
    fn get_detail_named_type(&self, _name: &str) -> Option<NamedTypeDetail> {
        None
    }
}

/// Resolver that knows no declarations.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopResolver;

impl TypeResolver for NoopResolver {
    fn get_supers(&self, _name: &str) -> Vec<LuaType> {
        Vec::new()
    }
}

/// Per-query handle threading the project index and limits into the
/// type model.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    resolver: &'a dyn TypeResolver,
    profile: RecursionProfile,
}

impl<'a> SearchContext<'a> {
    pub fn new(resolver: &'a dyn TypeResolver) -> Self {
        Self {
            resolver,
            profile: RecursionProfile::SupertypeSearch,
        }
    }

    pub fn with_profile(mut self, profile: RecursionProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn resolver(&self) -> &'a dyn TypeResolver {
        self.resolver
    }

    pub fn profile(&self) -> RecursionProfile {
        self.profile
    }

    pub fn get_supers(&self, name: &str) -> Vec<LuaType> {
        self.resolver.get_supers(name)
    }

    pub fn get_detail_named_type(&self, name: &str) -> Option<NamedTypeDetail> {
        self.resolver.get_detail_named_type(name)
    }
}

// =============================================================================
// SubtypeChecker
// =============================================================================

/// Stateful subtype checker.
///
/// Each supertype walk gets its own [`RecursionGuard`]; nested walks started
/// from a structured supertype (a union, tuple or array super) check a
/// strictly smaller target, so the recursion terminates.
pub struct SubtypeChecker<'a> {
    ctx: SearchContext<'a>,
    depth_exceeded: bool,
}

impl<'a> SubtypeChecker<'a> {
    pub fn new(ctx: SearchContext<'a>) -> Self {
        Self {
            ctx,
            depth_exceeded: false,
        }
    }

    /// Whether the last query gave up on a supertype walk because a limit was hit.
    pub fn depth_exceeded(&self) -> bool {
        self.depth_exceeded
    }

    /// Check `source <: target`.
    pub fn is_subtype_of(&mut self, source: &LuaType, target: &LuaType) -> bool {
        self.depth_exceeded = false;
        self.check(source, target)
    }

    fn check(&mut self, source: &LuaType, target: &LuaType) -> bool {
        if target.is_top() || source == target {
            return true;
        }

        match source {
            LuaType::Named(name) => self.check_named(name, source, target),
            LuaType::Generic(generic) => self.check_named(&generic.name, source, target),
            LuaType::Union(union) => match target {
                LuaType::Union(target_union) => union.members().iter().all(|member| {
                    target_union
                        .members()
                        .iter()
                        .any(|target_member| self.check(member, target_member))
                }),
                _ => false,
            },
            LuaType::Tuple(tuple) => match target {
                LuaType::Tuple(target_tuple) => {
                    tuple.len() == target_tuple.len()
                        && tuple
                            .types()
                            .zip(target_tuple.types())
                            .all(|(member, target_member)| self.check(member, target_member))
                }
                _ => false,
            },
            LuaType::Array(element) => match target {
                LuaType::Array(target_element) => self.check(element, target_element),
                _ => false,
            },
            _ => false,
        }
    }

    fn check_named(&mut self, name: &Name, source: &LuaType, target: &LuaType) -> bool {
        if named_view_matches(source, target) {
            return true;
        }

        let mut guard = RecursionGuard::with_profile(self.ctx.profile());
        let related = self.walk_supers(name, target, &mut guard);
        if guard.is_exceeded() {
            self.depth_exceeded = true;
        }
        related
    }

    /// Whether some supertype reachable from `name` is a subtype of `target`.
    fn walk_supers(
        &mut self,
        name: &Name,
        target: &LuaType,
        guard: &mut RecursionGuard<Name>,
    ) -> bool {
        match guard.enter(name.clone()) {
            RecursionResult::Entered => {
                let supers = self.ctx.get_supers(name);
                let related = supers
                    .iter()
                    .any(|super_type| self.super_matches(super_type, target, guard));
                guard.leave(name);
                related
            }
            RecursionResult::Revisited => {
                trace!(%name, "supertype already visited, no further supertypes");
                false
            }
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                debug!(
                    %name,
                    depth = guard.depth(),
                    iterations = guard.iterations(),
                    "supertype walk exceeded recursion limits"
                );
                false
            }
        }
    }

    fn super_matches(
        &mut self,
        super_type: &LuaType,
        target: &LuaType,
        guard: &mut RecursionGuard<Name>,
    ) -> bool {
        if super_type == target || named_view_matches(super_type, target) {
            return true;
        }
        match super_type {
            LuaType::Named(name) => self.walk_supers(name, target, guard),
            LuaType::Generic(generic) => self.walk_supers(&generic.name, target, guard),
            _ => self.check(super_type, target),
        }
    }
}

/// `Named`/`Generic` pairs sharing an identifier where one side is the
/// plain `Named` form.
fn named_view_matches(source: &LuaType, target: &LuaType) -> bool {
    match (source, target) {
        (LuaType::Named(name), LuaType::Generic(generic))
        | (LuaType::Generic(generic), LuaType::Named(name)) => *name == generic.name,
        _ => false,
    }
}

/// Check `source <: target` with a fresh checker.
pub fn is_subtype_of(ctx: &SearchContext<'_>, source: &LuaType, target: &LuaType) -> bool {
    SubtypeChecker::new(*ctx).is_subtype_of(source, target)
}

impl LuaType {
    /// `self <: other` under the declarations reachable from `ctx`.
    pub fn sub_type_of(&self, other: &LuaType, ctx: &SearchContext<'_>) -> bool {
        is_subtype_of(ctx, self, other)
    }

    /// Full declaration behind a named view, if the resolver knows it.
    pub fn get_detail_type(&self, ctx: &SearchContext<'_>) -> Option<NamedTypeDetail> {
        self.as_named()
            .and_then(|name| ctx.get_detail_named_type(name))
    }
}

#[cfg(test)]
#[path = "../tests/subtype_tests.rs"]
mod tests;
