//! The `properties` tool: prints the effective configuration.

use cmdhub_application::ParsedTool;
use cmdhub_domain::{GlobalOptions, ToolContext, ToolError};

/// Prints `key=value` for every property, optionally filtered by key prefix
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertiesTool;

impl ParsedTool for PropertiesTool {
    fn name(&self) -> &str {
        "properties"
    }

    fn aliases(&self) -> &[&str] {
        &["props"]
    }

    fn summary(&self) -> &str {
        "shows the effective configuration properties"
    }

    fn run_parsed(
        &self,
        _options: &GlobalOptions,
        prefixes: &[String],
        ctx: &mut ToolContext<'_>,
    ) -> Result<i32, ToolError> {
        let wanted = |key: &str| {
            prefixes.is_empty() || prefixes.iter().any(|p| key.starts_with(p.as_str()))
        };

        let mut shown = 0usize;
        for (key, value) in ctx.properties.entries() {
            if wanted(key) {
                writeln!(ctx.console, "{key}={value}")?;
                shown += 1;
            }
        }

        tracing::debug!(shown, "Listed properties");
        Ok(0)
    }
}
