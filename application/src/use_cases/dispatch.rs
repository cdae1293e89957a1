//! Dispatch Command use case
//!
//! Runs one command per invocation, at most once:
//!
//! 1. **Split**: first token is the command, the rest are its arguments. No
//!    tokens at all becomes `help no-command-specified`.
//! 2. **Resolve**: look the command up by name or alias. A matching tool runs
//!    and its status is returned; its failure propagates unchanged.
//! 3. **Fallback**: otherwise ask the [`EntryPointLocator`] for a target by
//!    that name. A tool target runs like a resolved tool; a generic entry point
//!    runs with its failure wrapped. Nothing found is fatal.

use std::io::Write;

use cmdhub_domain::{BoxError, ProgramInfo, PropertyStore, ToolContext, ToolDiscovery, ToolError};
use thiserror::Error;
use tracing::info;

use super::resolve_tool::ToolResolver;
use crate::ports::entry_point::{EntryPointLocator, FallbackTarget, LocateError};

/// Command substituted when no arguments are given
pub const HELP_COMMAND: &str = "help";

/// Marker argument telling the help tool that no command was typed
pub const NO_COMMAND_SENTINEL: &str = "no-command-specified";

/// Errors surfaced by dispatch
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The tool itself failed; passed through untouched
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Neither a tool nor a fallback target answers to the name
    #[error("cannot dispatch '{name}'")]
    Unresolved {
        name: String,
        #[source]
        source: LocateError,
    },

    /// A generic entry point failed
    #[error("entry point '{name}' failed")]
    EntryPoint {
        name: String,
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Whether the command could not be found anywhere
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DispatchError::Unresolved {
                source: LocateError::NotFound(_),
                ..
            }
        )
    }
}

/// A command line split into command name and tool arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn split(argv: Vec<String>) -> Self {
        let mut tokens = argv.into_iter();
        match tokens.next() {
            Some(command) => Self {
                command,
                args: tokens.collect(),
            },
            None => Self {
                command: HELP_COMMAND.to_string(),
                args: vec![NO_COMMAND_SENTINEL.to_string()],
            },
        }
    }
}

/// Use case for dispatching a single command line
pub struct DispatchCommandUseCase<'a> {
    discovery: &'a dyn ToolDiscovery,
    fallback: &'a dyn EntryPointLocator,
    program: ProgramInfo,
}

impl<'a> DispatchCommandUseCase<'a> {
    pub fn new(
        discovery: &'a dyn ToolDiscovery,
        fallback: &'a dyn EntryPointLocator,
        program: ProgramInfo,
    ) -> Self {
        Self {
            discovery,
            fallback,
            program,
        }
    }

    /// Dispatch `argv` (program name excluded) and return the exit status
    pub fn execute(
        &self,
        argv: Vec<String>,
        properties: &mut dyn PropertyStore,
        console: &mut dyn Write,
    ) -> Result<i32, DispatchError> {
        let line = CommandLine::split(argv);
        let mut ctx = ToolContext::new(properties, self.discovery, &self.program, console);

        match ToolResolver::new(self.discovery).resolve(&line.command) {
            Some(tool) => {
                info!(command = %line.command, tool = tool.name(), "Dispatching to tool");
                Ok(tool.run(&line.args, &mut ctx)?)
            }
            None => {
                info!(command = %line.command, "No tool matched, trying fallback");
                self.run_fallback(&line.command, &line.args, &mut ctx)
            }
        }
    }

    /// Run a fallback target directly by name, skipping name resolution
    pub fn run_type(
        &self,
        name: &str,
        args: &[String],
        properties: &mut dyn PropertyStore,
        console: &mut dyn Write,
    ) -> Result<i32, DispatchError> {
        let mut ctx = ToolContext::new(properties, self.discovery, &self.program, console);
        self.run_fallback(name, args, &mut ctx)
    }

    fn run_fallback(
        &self,
        name: &str,
        args: &[String],
        ctx: &mut ToolContext<'_>,
    ) -> Result<i32, DispatchError> {
        let target = self
            .fallback
            .locate(name)
            .map_err(|source| DispatchError::Unresolved {
                name: name.to_string(),
                source,
            })?;

        match target {
            FallbackTarget::Tool(tool) => {
                info!(fallback = name, tool = tool.name(), "Running fallback tool");
                Ok(tool.run(args, ctx)?)
            }
            FallbackTarget::EntryPoint(entry) => {
                info!(fallback = name, "Invoking fallback entry point");
                entry
                    .invoke(args)
                    .map_err(|source| DispatchError::EntryPoint {
                        name: name.to_string(),
                        source,
                    })
            }
        }
    }
}
