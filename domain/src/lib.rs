//! Domain layer for cmdhub
//!
//! This crate contains the tool contract and the value types shared by every
//! other layer. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Tool**: a named, runnable command ([`CliTool`])
//! - **Discovery**: where tools come from ([`ToolDiscovery`]), with a curated
//!   popular view and an open all-tools view
//! - **Properties**: the configuration store `-D` overrides write into
//!   ([`PropertyStore`])
//! - **Global options**: the fixed `-D`/`-I` schema and its help synthesis

pub mod config;
pub mod core;
pub mod options;
pub mod tool;

// Re-export commonly used types
pub use config::{Properties, PropertyStore};
pub use core::program::ProgramInfo;
pub use options::{GLOBAL_OPTIONS, GlobalOptions, OptionSpec, OptionSyntaxError};
pub use tool::{
    BoxError, CliTool, ConstructionError, NO_SUMMARY, ToolContext, ToolDescriptor, ToolDiscovery,
    ToolError,
};
