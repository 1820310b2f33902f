//! Bounded, cycle-aware recursion over named types.
//!
//! Subtyping walks `---@class Child: Parent` edges taken straight from user
//! code. Those edges may loop (`A: B`, `B: A`), share ancestors (diamonds) or
//! chain absurdly deep, so each walk carries a [`RecursionGuard`]:
//!
//! - every name entered stays visited until [`reset`](RecursionGuard::reset);
//!   entering it again is reported as [`RecursionResult::Revisited`] and
//!   contributes nothing further, which covers cycles and shared ancestors
//! - the walk stops with [`RecursionResult::DepthExceeded`] once it is
//!   `max_depth` names deep on the current path
//! - every `enter` counts toward `max_iterations`
//!
//! Limits come from a [`RecursionProfile`]; the default one reads
//! `luals_common::limits`.

use luals_common::limits::{MAX_SUPERTYPE_DEPTH, MAX_SUPERTYPE_ITERATIONS};
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Limit preset for a guarded walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Supertype walk during subtyping (depth 100, 100,000 visits).
    #[default]
    SupertypeSearch,
    /// Limits from configuration or tests.
    Custom { max_depth: u32, max_iterations: u32 },
}

impl RecursionProfile {
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::SupertypeSearch => MAX_SUPERTYPE_DEPTH,
            Self::Custom { max_depth, .. } => max_depth,
        }
    }

    pub const fn max_iterations(self) -> u32 {
        match self {
            Self::SupertypeSearch => MAX_SUPERTYPE_ITERATIONS,
            Self::Custom { max_iterations, .. } => max_iterations,
        }
    }
}

/// Outcome of [`RecursionGuard::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    Entered,
    /// The key was entered earlier in this walk.
    Revisited,
    DepthExceeded,
    IterationExceeded,
}

impl RecursionResult {
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }

    pub fn is_revisited(self) -> bool {
        matches!(self, Self::Revisited)
    }

    pub fn is_exceeded(self) -> bool {
        matches!(self, Self::DepthExceeded | Self::IterationExceeded)
    }
}

/// Keys seen during one walk, plus path depth and work counters.
///
/// Every `Entered` must be paired with a [`leave`](Self::leave) of the same
/// key. Leaving only shortens the current path; the key stays visited. Debug
/// builds panic on an unmatched `leave` and on dropping a guard with a
/// non-empty path.
#[derive(Debug)]
pub struct RecursionGuard<K: Hash + Eq> {
    visited: FxHashSet<K>,
    depth: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
    exceeded: bool,
}

impl<K: Hash + Eq> RecursionGuard<K> {
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            visited: FxHashSet::default(),
            depth: 0,
            iterations: 0,
            max_depth,
            max_iterations,
            exceeded: false,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth(), profile.max_iterations())
    }

    pub fn enter(&mut self, key: K) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);
        if self.iterations > self.max_iterations {
            self.exceeded = true;
            return RecursionResult::IterationExceeded;
        }
        if self.visited.contains(&key) {
            return RecursionResult::Revisited;
        }
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }
        self.visited.insert(key);
        self.depth += 1;
        RecursionResult::Entered
    }

    pub fn leave(&mut self, key: &K) {
        debug_assert!(
            self.depth > 0 && self.visited.contains(key),
            "RecursionGuard::leave without a matching enter"
        );
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn has_visited(&self, key: &K) -> bool {
        self.visited.contains(key)
    }

    /// Length of the current path.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Distinct keys entered since the last reset.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// `enter` calls since the last reset, denied ones included.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether a limit was hit since the last reset.
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Forget all state; limits are kept.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.depth = 0;
        self.iterations = 0;
        self.exceeded = false;
    }
}

#[cfg(debug_assertions)]
impl<K: Hash + Eq> Drop for RecursionGuard<K> {
    fn drop(&mut self) {
        if !std::thread::panicking() && self.depth != 0 {
            panic!("RecursionGuard dropped with {} keys still entered", self.depth);
        }
    }
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
