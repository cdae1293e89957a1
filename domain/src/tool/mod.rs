//! Tool domain module
//!
//! Defines what a runnable command is and where commands come from.
//!
//! ```text
//! ┌───────────────┐   popular_tools()   ┌──────────────┐
//! │ ToolDiscovery │────────────────────▶│ Box<CliTool> │──▶ run(args, ctx)
//! │               │   all_tools()       │              │
//! └───────────────┘                     └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`CliTool`]: name, aliases, summary, help and the `run` entry point
//! - [`ToolContext`]: properties, discovery set, program info and console
//!   handed to a running tool
//! - [`ToolDiscovery`]: the two discovery views (popular, all)
//! - [`ToolDescriptor`]: owned snapshot of a tool's identity for display
//! - [`ToolError`] / [`ConstructionError`]: failure taxonomy
//!
//! Name resolution itself lives in the application layer.

pub mod entities;
pub mod provider;
pub mod traits;
pub mod value_objects;

pub use entities::ToolDescriptor;
pub use provider::ToolDiscovery;
pub use traits::{CliTool, NO_SUMMARY, ToolContext};
pub use value_objects::{BoxError, ConstructionError, ToolError};
