//! The `help` tool
//!
//! ```text
//! cmdhub help                        banner, popular commands, all commands
//! cmdhub help <command>              banner, that command's help()
//! cmdhub help no-command-specified   banner, notice, then the listing
//! ```

use cmdhub_application::{NO_COMMAND_SENTINEL, ToolResolver};
use cmdhub_domain::{CliTool, ToolContext, ToolError};

use crate::output::listing::CommandListing;

const SUMMARY: &str = "provides a list of available commands";

/// Lists available commands or shows help for one of them
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpTool;

impl HelpTool {
    pub fn new() -> Self {
        Self
    }

    fn list_commands(&self, ctx: &mut ToolContext<'_>) -> Result<(), ToolError> {
        let popular = CommandListing::in_order(&ctx.discovery.popular_tools());
        let all = CommandListing::sorted(&ctx.discovery.all_tools());

        writeln!(ctx.console, "Popular commands:")?;
        write!(ctx.console, "{popular}")?;
        writeln!(ctx.console)?;
        writeln!(ctx.console, "All possible commands:")?;
        write!(ctx.console, "{all}")?;
        writeln!(ctx.console)?;
        writeln!(
            ctx.console,
            "See '{} help <command>' to read about a specific command.",
            ctx.program.name
        )?;
        Ok(())
    }

    fn describe(&self, command: &str, ctx: &mut ToolContext<'_>) -> Result<(), ToolError> {
        match ToolResolver::new(ctx.discovery).resolve(command) {
            Some(tool) => writeln!(ctx.console, "{}", tool.help())?,
            None => writeln!(
                ctx.console,
                "No such known command {command}. Use '{} help' to get a list of commands.",
                ctx.program.name
            )?,
        }
        Ok(())
    }
}

impl CliTool for HelpTool {
    fn name(&self) -> &str {
        "help"
    }

    fn summary(&self) -> &str {
        SUMMARY
    }

    fn help(&self) -> String {
        SUMMARY.to_string()
    }

    fn run(&self, args: &[String], ctx: &mut ToolContext<'_>) -> Result<i32, ToolError> {
        writeln!(ctx.console, "{}", ctx.program.banner())?;

        let args: &[String] = match args {
            [only] if only == NO_COMMAND_SENTINEL => {
                writeln!(ctx.console, "No command specified. You must specify a command.")?;
                &[]
            }
            _ => args,
        };

        // Only the first argument is looked at
        match args.first() {
            None => self.list_commands(ctx)?,
            Some(command) => self.describe(command, ctx)?,
        }
        Ok(0)
    }
}
