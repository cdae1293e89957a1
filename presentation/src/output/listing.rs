//! Command listing shown by `help`
//!
//! Each entry renders as a tab-indented `name<TAB>summary` line. Names of five
//! characters or fewer get an extra tab so summaries line up.

use cmdhub_domain::{CliTool, ToolDescriptor};
use std::fmt;

/// Names up to this length are padded with an extra tab
const SHORT_NAME_LEN: usize = 5;

/// An ordered list of commands with their summaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandListing {
    entries: Vec<ToolDescriptor>,
}

impl CommandListing {
    /// Listing in the order given
    pub fn in_order(tools: &[Box<dyn CliTool>]) -> Self {
        Self {
            entries: ToolDescriptor::of_all(tools),
        }
    }

    /// Listing sorted lexicographically by primary name
    pub fn sorted(tools: &[Box<dyn CliTool>]) -> Self {
        let mut entries = ToolDescriptor::of_all(tools);
        ToolDescriptor::sort_by_name(&mut entries);
        Self { entries }
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn line(name: &str, summary: &str) -> String {
        if name.chars().count() <= SHORT_NAME_LEN {
            format!("\t{name}\t\t{summary}")
        } else {
            format!("\t{name}\t{summary}")
        }
    }
}

impl fmt::Display for CommandListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", Self::line(&entry.name, &entry.summary))?;
        }
        Ok(())
    }
}
