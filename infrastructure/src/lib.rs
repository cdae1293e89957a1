//! Infrastructure layer for cmdhub
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers: the tool catalog, fallback entry points and
//! configuration file loading.

pub mod config;
pub mod tools;

// Re-export commonly used types
pub use config::{
    CONFIG_PATH_ENV, ConfigLoader, ConfigValidationError, FileConfig, FileFallbackConfig,
    FileLoggingConfig,
};
pub use tools::{EntryPointTable, ExternalProgram, ToolCatalog, ToolFactory};
