//! luals: static type model and type-operator index for a Lua language server.
//!
//! This crate re-exports the engine crates and adds the pieces a host needs
//! around them:
//!
//! - [`types`]: type values, subtyping, generic instantiation
//! - [`index`]: per-document operator and feature index
//! - [`common`]: document and syntax identities, limits
//! - [`config`]: analyzer configuration file
//! - [`tracing_config`]: `LUALS_LOG` driven tracing subscriber
//!
//! A host binds each edited document into a
//! [`DocumentContributions`](index::DocumentContributions) batch and hands it
//! to [`SharedTypeIndex::replace_document`](index::SharedTypeIndex::replace_document);
//! queries build a [`SearchContext`](types::SearchContext) over their
//! declaration store.

pub use luals_common as common;
pub use luals_index as index;
pub use luals_types as types;

pub mod config;
pub mod tracing_config;

pub use config::AnalyzerConfig;
pub use tracing_config::init_tracing;
