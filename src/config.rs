//! Analyzer configuration.
//!
//! Read from a JSON file (`.luals.json` by convention):
//!
//! ```json
//! {
//!   "featurePrecedence": ["class", "enum", "interface", "alias"],
//!   "supertypeSearch": { "maxDepth": 100, "maxIterations": 100000 }
//! }
//! ```
//!
//! Every field is optional. `featurePrecedence` lists features lowest first
//! and must name each feature exactly once.

use anyhow::{Context, Result, bail};
use luals_common::limits;
use luals_index::{SharedTypeIndex, TypeIndex};
use luals_types::{FeaturePrecedence, RecursionProfile, TypeFeature};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = ".luals.json";

/// Limits for the supertype walk in subtype checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupertypeSearchConfig {
    pub max_depth: u32,
    pub max_iterations: u32,
}

impl Default for SupertypeSearchConfig {
    fn default() -> Self {
        Self {
            max_depth: limits::MAX_SUPERTYPE_DEPTH,
            max_iterations: limits::MAX_SUPERTYPE_ITERATIONS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerConfig {
    /// Features lowest first; the last one wins `get_feature` ties.
    pub feature_precedence: Vec<TypeFeature>,
    pub supertype_search: SupertypeSearchConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            feature_precedence: FeaturePrecedence::default().order().to_vec(),
            supertype_search: SupertypeSearchConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a configuration document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(source).context("failed to parse analyzer config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read analyzer config: {}", path.display()))?;
        let config = Self::from_json_str(&source)
            .with_context(|| format!("invalid analyzer config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded analyzer config");
        Ok(config)
    }

    /// Load `dir/.luals.json` if present, defaults otherwise.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(dir = %dir.display(), "no analyzer config, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    fn validate(&self) -> Result<()> {
        if FeaturePrecedence::from_order(&self.feature_precedence).is_none() {
            bail!(
                "featurePrecedence must list each of {} exactly once, got {:?}",
                TypeFeature::ALL.map(TypeFeature::as_str).join(", "),
                self.feature_precedence
            );
        }
        if self.supertype_search.max_depth == 0 {
            bail!("supertypeSearch.maxDepth must be at least 1");
        }
        if self.supertype_search.max_iterations == 0 {
            bail!("supertypeSearch.maxIterations must be at least 1");
        }
        Ok(())
    }

    /// Feature precedence, or the default order if the list is not a
    /// permutation of all features.
    pub fn feature_precedence(&self) -> FeaturePrecedence {
        FeaturePrecedence::from_order(&self.feature_precedence).unwrap_or_default()
    }

    pub fn search_profile(&self) -> RecursionProfile {
        let SupertypeSearchConfig {
            max_depth,
            max_iterations,
        } = self.supertype_search;
        if max_depth == limits::MAX_SUPERTYPE_DEPTH
            && max_iterations == limits::MAX_SUPERTYPE_ITERATIONS
        {
            RecursionProfile::SupertypeSearch
        } else {
            RecursionProfile::Custom {
                max_depth,
                max_iterations,
            }
        }
    }

    /// Empty index resolving features with this configuration's precedence.
    pub fn type_index(&self) -> TypeIndex {
        TypeIndex::with_precedence(self.feature_precedence())
    }

    pub fn shared_type_index(&self) -> SharedTypeIndex {
        SharedTypeIndex::new(self.type_index())
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
