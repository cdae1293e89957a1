//! CLI command definitions
//!
//! Only the command line shape lives here. Everything after the program name
//! is handed to the dispatcher verbatim, so `--help`, `--version` and tool
//! options such as `-D` are never interpreted at this level. Usage text is the
//! `help` tool's job:
//!
//! ```text
//! cmdhub                      list popular and all commands
//! cmdhub help <command>       show help for a single command
//! cmdhub <command> [args]...  run a command
//! ```

use clap::Parser;

/// CLI arguments for cmdhub
#[derive(Parser, Debug)]
#[command(name = "cmdhub")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// The tokens handed to the dispatcher (program name excluded)
    pub fn into_argv(self) -> Vec<String> {
        self.command
    }
}
