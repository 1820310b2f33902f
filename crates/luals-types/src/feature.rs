//! Nominal classification of declared types.
//!
//! Lua declarations are often partial: a class may be reopened in several
//! files, and one of those files may declare the same name as an interface or
//! an alias. Each declaration contributes a [`TypeFeature`]; the index resolves
//! disagreement by taking the highest one under a [`FeaturePrecedence`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a named type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFeature {
    /// `---@class`. Also the classification of undeclared names.
    #[default]
    Class,
    /// `---@enum`
    Enum,
    /// Interface-like declaration (structural, no implementation).
    Interface,
    /// `---@alias`
    Alias,
}

impl TypeFeature {
    /// All features in declaration order.
    pub const ALL: [Self; 4] = [Self::Class, Self::Enum, Self::Interface, Self::Alias];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Alias => "alias",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Class => 0,
            Self::Enum => 1,
            Self::Interface => 2,
            Self::Alias => 3,
        }
    }
}

impl fmt::Display for TypeFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total order over [`TypeFeature`] used to pick a winner.
///
/// Stored as a rank per feature; a higher rank wins. The default ranks the
/// features in declaration order: `Class < Enum < Interface < Alias`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FeaturePrecedence {
    ranks: [u8; 4],
}

impl Default for FeaturePrecedence {
    fn default() -> Self {
        Self {
            ranks: [0, 1, 2, 3],
        }
    }
}

impl FeaturePrecedence {
    /// Build a precedence from features listed lowest first.
    ///
    /// Returns `None` unless `order` names every feature exactly once.
    pub fn from_order(order: &[TypeFeature]) -> Option<Self> {
        if order.len() != TypeFeature::ALL.len() {
            return None;
        }
        let mut ranks = [u8::MAX; 4];
        for (rank, feature) in order.iter().enumerate() {
            let slot = &mut ranks[feature.slot()];
            if *slot != u8::MAX {
                return None;
            }
            *slot = rank as u8;
        }
        Some(Self { ranks })
    }

    pub const fn rank(&self, feature: TypeFeature) -> u8 {
        self.ranks[feature.slot()]
    }

    /// Features listed lowest first.
    pub fn order(&self) -> [TypeFeature; 4] {
        let mut order = TypeFeature::ALL;
        order.sort_by_key(|feature| self.rank(*feature));
        order
    }

    /// The highest-ranked feature in `features`, or `None` if it is empty.
    pub fn max(&self, features: impl IntoIterator<Item = TypeFeature>) -> Option<TypeFeature> {
        features.into_iter().max_by_key(|feature| self.rank(*feature))
    }
}

#[cfg(test)]
#[path = "../tests/feature_tests.rs"]
mod tests;
