//! Per-document batch of index contributions.

use luals_common::Name;
use luals_types::{TypeFeature, TypeOperator};

/// Operators and features one document declares.
///
/// Binding collects these while walking a document, and the whole batch is
/// handed to the index at once so the document's previous contributions can
/// be replaced as a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentContributions {
    pub operators: Vec<TypeOperator>,
    pub features: Vec<(Name, TypeFeature)>,
}

impl DocumentContributions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_operator(&mut self, operator: TypeOperator) {
        self.operators.push(operator);
    }

    pub fn add_feature(&mut self, name: impl Into<Name>, feature: TypeFeature) {
        self.features.push((name.into(), feature));
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty() && self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operators.len() + self.features.len()
    }
}
