//! The tool contract
//!
//! Every command the dispatcher can run implements [`CliTool`]. A tool is
//! identified by its [`name`](CliTool::name) and optional
//! [`aliases`](CliTool::aliases); everything else about it is opaque to the
//! dispatcher.

use std::io::Write;

use super::provider::ToolDiscovery;
use super::value_objects::ToolError;
use crate::config::PropertyStore;
use crate::core::program::ProgramInfo;

/// Summary reported by tools that do not describe themselves
pub const NO_SUMMARY: &str = "(no summary provided)";

/// Everything a tool may touch while it runs
///
/// Configuration, the discovery set and the console are threaded through
/// explicitly so that tools never reach for process globals.
pub struct ToolContext<'a> {
    /// Property store; `-D` overrides are already applied when a tool body runs
    pub properties: &'a mut dyn PropertyStore,
    /// The tool set visible to this invocation
    pub discovery: &'a dyn ToolDiscovery,
    /// Program name and version
    pub program: &'a ProgramInfo,
    /// Where user-facing text goes
    pub console: &'a mut dyn Write,
}

impl<'a> ToolContext<'a> {
    pub fn new(
        properties: &'a mut dyn PropertyStore,
        discovery: &'a dyn ToolDiscovery,
        program: &'a ProgramInfo,
        console: &'a mut dyn Write,
    ) -> Self {
        Self {
            properties,
            discovery,
            program,
            console,
        }
    }
}

/// A named, runnable command
pub trait CliTool {
    /// Name the tool responds to
    ///
    /// Defaults to the implementing type's fully qualified path.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Additional names the tool responds to
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description
    fn summary(&self) -> &str {
        NO_SUMMARY
    }

    /// Full help text
    fn help(&self) -> String {
        self.summary().to_string()
    }

    /// Run the tool with the arguments that followed the command name.
    ///
    /// The returned value is the process exit status.
    fn run(&self, args: &[String], ctx: &mut ToolContext<'_>) -> Result<i32, ToolError>;

    /// Whether `command` is this tool's name or one of its aliases
    fn answers_to(&self, command: &str) -> bool {
        self.name() == command || self.aliases().contains(&command)
    }
}
