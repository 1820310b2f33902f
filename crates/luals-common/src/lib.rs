//! Common types and utilities for the luals type engine.
//!
//! This crate provides foundational types used across all luals crates:
//! - Identities handed in by the hosting compilation (`DocumentId`, `SyntaxId`)
//! - Shared identifier strings (`Name`)
//! - Engine limits and thresholds

// Document and syntax identities
pub mod ids;
pub use ids::{DocumentId, Name, SyntaxId};

// Centralized limits and thresholds
pub mod limits;
