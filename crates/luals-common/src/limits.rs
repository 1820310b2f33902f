//! Centralized limits and thresholds for the type engine.
//!
//! Recursion in the type model only happens when subtyping walks declared
//! supertypes of a named type. The walk is guarded by
//! `luals_types::recursion::RecursionGuard`, whose `SupertypeSearch` profile
//! reads the defaults below.

/// Maximum nesting depth of a supertype walk.
///
/// Each level is one `---@class Child: Parent` edge. Real hierarchies are a
/// handful of levels deep; reaching this limit means the declaration graph is
/// degenerate and the walk answers "not a subtype".
///
/// ```lua
/// ---@class A: B
/// ---@class B: C
/// ---@class C: A   -- cycle, caught by the visited set long before the limit
/// ```
pub const MAX_SUPERTYPE_DEPTH: u32 = 100;

/// Maximum number of supertype visits in one top-level subtype query.
///
/// Bounds diamond-heavy hierarchies where the same ancestor is reachable
/// through many paths.
pub const MAX_SUPERTYPE_ITERATIONS: u32 = 100_000;
