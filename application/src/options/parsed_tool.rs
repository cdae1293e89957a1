//! Tools that take the global `-D`/`-I` options
//!
//! Implement [`ParsedTool`] and register the tool wrapped in [`Parsed`]. The
//! wrapper owns `run` and `help`: it parses the fixed schema, applies every
//! `-D` assignment to the property store, then calls
//! [`ParsedTool::run_parsed`] with the remaining positional arguments.

use cmdhub_domain::options::synthesize_help;
use cmdhub_domain::{CliTool, GlobalOptions, NO_SUMMARY, ToolContext, ToolError};

use super::parser::parse_global_options;

/// Body of a parsed-option tool
pub trait ParsedTool {
    /// Name the tool responds to
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

    /// Runs after options are parsed and `-D` assignments are visible in
    /// `ctx.properties`.
    fn run_parsed(
        &self,
        options: &GlobalOptions,
        args: &[String],
        ctx: &mut ToolContext<'_>,
    ) -> Result<i32, ToolError>;
}

/// Adapts a [`ParsedTool`] into a [`CliTool`]
#[derive(Debug, Clone, Default)]
pub struct Parsed<T>(pub T);

impl<T: ParsedTool> Parsed<T> {
    pub fn new(tool: T) -> Self {
        Self(tool)
    }

    pub fn inner(&self) -> &T {
        &self.0
    }
}

impl<T: ParsedTool> CliTool for Parsed<T> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn aliases(&self) -> &[&str] {
        self.0.aliases()
    }

    fn summary(&self) -> &str {
        self.0.summary()
    }

    fn help(&self) -> String {
        synthesize_help(self.0.name(), self.0.summary())
    }

    fn run(&self, args: &[String], ctx: &mut ToolContext<'_>) -> Result<i32, ToolError> {
        let parsed = parse_global_options(args).map_err(|e| ToolError::OptionParse {
            tool: self.0.name().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            tool = self.0.name(),
            properties = parsed.options.properties.len(),
            index_ref = ?parsed.options.index_ref,
            "Parsed global options"
        );

        parsed.options.apply_to(&mut *ctx.properties);

        self.0.run_parsed(&parsed.options, &parsed.positionals, ctx)
    }
}
