//! Shared fixtures for unit tests

use cmdhub_domain::{CliTool, ToolContext, ToolDiscovery, ToolError};
use std::cell::RefCell;
use std::rc::Rc;

pub type Factory = Box<dyn Fn() -> Box<dyn CliTool>>;

/// Calls observed by [`NamedTool`]s: (tool name, args)
pub type CallLog = Rc<RefCell<Vec<(String, Vec<String>)>>>;

/// Discovery over a fixed, ordered list of factories, with no curated list
#[derive(Default)]
pub struct StaticDiscovery {
    tools: Vec<Factory>,
}

impl StaticDiscovery {
    pub fn with_tool(mut self, factory: impl Fn() -> Box<dyn CliTool> + 'static) -> Self {
        self.tools.push(Box::new(factory));
        self
    }

    pub fn with_named(self, name: &'static str, aliases: &[&'static str], log: &CallLog) -> Self {
        let aliases = aliases.to_vec();
        let log = log.clone();
        self.with_tool(move || -> Box<dyn CliTool> {
            Box::new(NamedTool::new(name, aliases.clone(), 0, log.clone()))
        })
    }
}

impl ToolDiscovery for StaticDiscovery {
    fn popular_tools(&self) -> Vec<Box<dyn CliTool>> {
        Vec::new()
    }

    fn all_tools(&self) -> Vec<Box<dyn CliTool>> {
        self.tools.iter().map(|f| f()).collect()
    }
}

/// Tool that records each invocation and returns a fixed status
pub struct NamedTool {
    name: &'static str,
    aliases: Vec<&'static str>,
    status: i32,
    log: CallLog,
}

impl NamedTool {
    pub fn new(name: &'static str, aliases: Vec<&'static str>, status: i32, log: CallLog) -> Self {
        Self {
            name,
            aliases,
            status,
            log,
        }
    }
}

impl CliTool for NamedTool {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&str] {
        &self.aliases
    }

    fn summary(&self) -> &str {
        "records calls"
    }

    fn run(&self, args: &[String], _ctx: &mut ToolContext<'_>) -> Result<i32, ToolError> {
        self.log
            .borrow_mut()
            .push((self.name.to_string(), args.to_vec()));
        Ok(self.status)
    }
}

/// Tool whose run always fails
pub struct FailingTool;

impl CliTool for FailingTool {
    fn name(&self) -> &str {
        "explode"
    }

    fn run(&self, _args: &[String], _ctx: &mut ToolContext<'_>) -> Result<i32, ToolError> {
        Err(ToolError::failed("index is corrupt"))
    }
}

pub fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
