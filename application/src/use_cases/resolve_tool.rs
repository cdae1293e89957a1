//! Command name resolution
//!
//! Maps a typed command to a tool by exact name or alias. Every call performs
//! a fresh [`ToolDiscovery::all_tools`] scan; results are never cached, so a
//! lookup always reflects the current tool set.
//!
//! When several tools claim the same name or alias, the first one in
//! discovery order wins.

use cmdhub_domain::{CliTool, ToolDiscovery};
use tracing::debug;

/// Resolves command names against a discovery set
pub struct ToolResolver<'a> {
    discovery: &'a dyn ToolDiscovery,
}

impl<'a> ToolResolver<'a> {
    pub fn new(discovery: &'a dyn ToolDiscovery) -> Self {
        Self { discovery }
    }

    /// Find the first tool whose name or alias equals `command`.
    ///
    /// A miss is not an error; callers decide what to tell the user.
    pub fn resolve(&self, command: &str) -> Option<Box<dyn CliTool>> {
        let tools = self.discovery.all_tools();
        let candidates = tools.len();

        let found = tools.into_iter().find(|tool| tool.answers_to(command));

        match &found {
            Some(tool) => debug!(command, tool = tool.name(), candidates, "Resolved command"),
            None => debug!(command, candidates, "No tool answers to command"),
        }

        found
    }
}
