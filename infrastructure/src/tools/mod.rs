//! Tool discovery and fallback adapters
//!
//! - `catalog`: the registration manifest implementing `ToolDiscovery`
//! - `entry_points`: the fallback locator (registered types, named entry
//!   points, executables on `PATH`)

mod catalog;
mod entry_points;

pub use catalog::{ToolCatalog, ToolFactory};
pub use entry_points::{EntryPointTable, ExternalProgram};
