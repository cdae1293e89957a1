//! Parser for the fixed `-D`/`-I` option schema.
//!
//! Built on clap so the grammar follows ordinary short-flag rules: `-D x=1`
//! and `-Dx=1` are equivalent, unknown flags are rejected, and flags may be
//! interleaved with positional arguments. Only `--` ends option parsing.

use clap::{Arg, ArgAction, Command};
use cmdhub_domain::options::{INDEX_OPTION, OptionSyntaxError, PROPERTY_OPTION, parse_assignment};
use cmdhub_domain::GlobalOptions;
use thiserror::Error;

const PROPERTY_ID: &str = "property";
const INDEX_ID: &str = "indexref";
const ARGS_ID: &str = "args";

/// Marks the end of options; everything after it is positional
const END_OF_OPTIONS: &str = "--";

/// Arguments did not fit the global option schema
#[derive(Debug, Error)]
pub enum OptionParseError {
    /// Rejected by the command-line grammar
    #[error("{0}")]
    Syntax(String),

    /// A `-D` value was malformed
    #[error(transparent)]
    Assignment(#[from] OptionSyntaxError),
}

impl From<clap::Error> for OptionParseError {
    fn from(error: clap::Error) -> Self {
        let rendered = error.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        Self::Syntax(first_line.trim_start_matches("error: ").trim().to_string())
    }
}

/// Global options plus the remaining positional arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: GlobalOptions,
    pub positionals: Vec<String>,
}

fn option_command() -> Command {
    Command::new("tool")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(PROPERTY_ID)
                .short(PROPERTY_OPTION.short)
                .value_name(PROPERTY_OPTION.value_name)
                .help(PROPERTY_OPTION.description)
                .num_args(1)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(INDEX_ID)
                .short(INDEX_OPTION.short)
                .value_name(INDEX_OPTION.value_name)
                .help(INDEX_OPTION.description)
                .num_args(1)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ARGS_ID)
                .num_args(1..)
                .action(ArgAction::Append),
        )
}

/// clap drops the `=` in `-D=value`, which would turn an empty property name
/// into a bare key. Catch that form before clap sees it.
fn reject_attached_empty_name(args: &[String]) -> Result<(), OptionSyntaxError> {
    let flag = format!("-{}", PROPERTY_OPTION.short);
    for arg in args.iter().take_while(|a| a.as_str() != END_OF_OPTIONS) {
        if let Some(rest) = arg.strip_prefix(flag.as_str()) {
            if rest.starts_with('=') {
                parse_assignment(rest)?;
            }
        }
    }
    Ok(())
}

/// Parse `args` against the global option schema
pub fn parse_global_options(args: &[String]) -> Result<ParsedArgs, OptionParseError> {
    reject_attached_empty_name(args)?;

    let matches = option_command().try_get_matches_from(args)?;

    let properties = matches
        .get_many::<String>(PROPERTY_ID)
        .into_iter()
        .flatten()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let index_ref = matches.get_one::<String>(INDEX_ID).cloned();

    let positionals = matches
        .get_many::<String>(ARGS_ID)
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    Ok(ParsedArgs {
        options: GlobalOptions {
            properties,
            index_ref,
        },
        positionals,
    })
}
