//! Opt-in diagnostics for the type model and the type index.
//!
//! Nothing is installed unless `LUALS_LOG` (or `RUST_LOG`) holds filter
//! directives. The interesting targets are:
//!
//! - `luals_index`: each operator and feature a document adds, and how many
//!   values a document removal dropped
//! - `luals_types::subtype`: revisited names and limit hits during
//!   supertype walks
//!
//! `LUALS_LOG_FORMAT` picks the rendering. A language server can only log to
//! stderr because stdout carries JSON-RPC, so every format writes there.
//!
//! ```bash
//! LUALS_LOG=luals_index=trace LUALS_LOG_FORMAT=tree lua-language-server
//! LUALS_LOG="luals_types::subtype=trace" lua-language-server
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "LUALS_LOG";

/// Environment variable selecting the [`LogFormat`].
pub const LOG_FORMAT_ENV: &str = "LUALS_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    #[default]
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively. Unknown names mean `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Filter from `LUALS_LOG`, else `RUST_LOG`; `None` when neither is set.
fn requested_filter() -> Option<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var_os("RUST_LOG").is_some() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

/// Install the global subscriber if logging was requested.
///
/// Returns `true` only when this call installed it. A host that already set
/// its own subscriber keeps it.
pub fn init_tracing() -> bool {
    let Some(filter) = requested_filter() else {
        return false;
    };

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init().is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
