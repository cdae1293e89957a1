//! Application layer for cmdhub
//!
//! This crate contains the dispatch use cases, the global option parser and
//! the fallback port. It depends only on the domain layer.

pub mod options;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use options::{OptionParseError, Parsed, ParsedArgs, ParsedTool, parse_global_options};
pub use ports::{EntryPointLocator, FallbackTarget, GenericEntryPoint, LocateError};
pub use use_cases::dispatch::{
    CommandLine, DispatchCommandUseCase, DispatchError, HELP_COMMAND, NO_COMMAND_SENTINEL,
};
pub use use_cases::resolve_tool::ToolResolver;
