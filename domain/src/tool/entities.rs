//! Tool domain entities

use std::collections::BTreeSet;

use super::traits::CliTool;

/// Snapshot of a tool's identity and descriptive text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Primary name
    pub name: String,
    /// Additional names
    pub aliases: BTreeSet<String>,
    /// One-line summary
    pub summary: String,
    /// Long-form help
    pub help: String,
}

impl ToolDescriptor {
    /// Describe a tool instance
    pub fn of(tool: &dyn CliTool) -> Self {
        Self {
            name: tool.name().to_string(),
            aliases: tool.aliases().iter().map(|a| a.to_string()).collect(),
            summary: tool.summary().to_string(),
            help: tool.help(),
        }
    }

    /// Describe every tool, keeping the input order
    pub fn of_all(tools: &[Box<dyn CliTool>]) -> Vec<Self> {
        tools.iter().map(|t| Self::of(t.as_ref())).collect()
    }

    /// Sort lexicographically by primary name
    pub fn sort_by_name(descriptors: &mut [ToolDescriptor]) {
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
    }
}
