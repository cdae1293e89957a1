//! Tool discovery abstraction
//!
//! A [`ToolDiscovery`] produces fresh tool instances on every call. It has two
//! independent views that are never merged:
//!
//! - [`popular_tools`](ToolDiscovery::popular_tools): the curated list, in its
//!   fixed order, minus any entry that failed to construct
//! - [`all_tools`](ToolDiscovery::all_tools): every tool visible to the
//!   process, in discovery order (unspecified, so callers sort for display)

use super::traits::CliTool;

/// Source of tools for resolution and help listings
pub trait ToolDiscovery {
    /// Curated tools, in curated order
    fn popular_tools(&self) -> Vec<Box<dyn CliTool>>;

    /// Every discoverable tool, in discovery order
    fn all_tools(&self) -> Vec<Box<dyn CliTool>>;
}
