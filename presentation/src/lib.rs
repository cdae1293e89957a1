//! Presentation layer for cmdhub
//!
//! This crate contains the top-level CLI definition, the command listing
//! formatter and the built-in tools (`help`, `properties`).

pub mod cli;
pub mod output;
pub mod tools;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::listing::CommandListing;
pub use tools::{HELP_TOOL_TYPE, HelpTool, PROPERTIES_TOOL_TYPE, PropertiesTool};
