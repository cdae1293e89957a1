//! Global option handling for parsed-option tools.

pub mod parsed_tool;
pub mod parser;

pub use parsed_tool::{Parsed, ParsedTool};
pub use parser::{OptionParseError, ParsedArgs, parse_global_options};
