//! Configuration module for booklet exports
//!
//! This module provides the `ExportConfig` struct, its YAML loader and its
//! type-safe builder.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{Complete, ExportConfigBuilder, WithSession};
pub use types::{ConfigError, ExportConfig};
