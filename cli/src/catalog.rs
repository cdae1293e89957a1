//! The tool manifest linked into this binary.
//!
//! Adding a tool means adding one `register` line here; the dispatcher and the
//! help tool pick it up through discovery.

use cmdhub_application::Parsed;
use cmdhub_infrastructure::ToolCatalog;
use cmdhub_presentation::{HELP_TOOL_TYPE, HelpTool, PROPERTIES_TOOL_TYPE, PropertiesTool};

/// Commands shown first by `help`, in display order.
///
/// The suite commands are provided by separately built tool crates. When
/// they are not linked in, they are silently left out of the listing.
pub const POPULAR_COMMANDS: &[&str] = &[
    HELP_TOOL_TYPE,
    PROPERTIES_TOOL_TYPE,
    "suite::indexing::BatchIndexing",
    "suite::querying::InteractiveQuerying",
    "suite::retrieval::BatchRetrieval",
    "suite::evaluation::Evaluation",
];

/// Build the catalog of every tool this binary knows about
pub fn tool_catalog() -> ToolCatalog {
    ToolCatalog::new()
        .register_default::<HelpTool>(HELP_TOOL_TYPE)
        .register_default::<Parsed<PropertiesTool>>(PROPERTIES_TOOL_TYPE)
        .with_popular(POPULAR_COMMANDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdhub_application::{DispatchCommandUseCase, DispatchError, EntryPointLocator};
    use cmdhub_domain::{
        BoxError, CliTool, ConstructionError, ProgramInfo, Properties, PropertyStore,
        ToolContext, ToolDiscovery, ToolError,
    };
    use cmdhub_infrastructure::EntryPointTable;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(String, Vec<String>)>>>;

    struct Recording {
        name: &'static str,
        aliases: &'static [&'static str],
        calls: Calls,
    }

    impl CliTool for Recording {
        fn name(&self) -> &str {
            self.name
        }

        fn aliases(&self) -> &[&str] {
            self.aliases
        }

        fn summary(&self) -> &str {
            "records its invocations"
        }

        fn run(&self, args: &[String], _ctx: &mut ToolContext<'_>) -> Result<i32, ToolError> {
            self.calls
                .borrow_mut()
                .push((self.name.to_string(), args.to_vec()));
            Ok(7)
        }
    }

    fn recording(
        catalog: ToolCatalog,
        type_id: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
        calls: &Calls,
    ) -> ToolCatalog {
        let calls = calls.clone();
        catalog.register(type_id, move || -> Result<Box<dyn CliTool>, ConstructionError> {
            Ok(Box::new(Recording {
                name,
                aliases,
                calls: calls.clone(),
            }))
        })
    }

    fn dispatch(
        discovery: &dyn ToolDiscovery,
        locator: &dyn EntryPointLocator,
        properties: &mut Properties,
        argv: &[&str],
    ) -> (Result<i32, DispatchError>, String) {
        let dispatcher =
            DispatchCommandUseCase::new(discovery, locator, ProgramInfo::new("cmdhub", "5.1"));
        let mut console = Vec::new();
        let argv = argv.iter().map(|s| s.to_string()).collect();
        let result = dispatcher.execute(argv, properties, &mut console);
        (result, String::from_utf8(console).unwrap())
    }

    fn run(catalog: &ToolCatalog, argv: &[&str]) -> (Result<i32, DispatchError>, String) {
        let table = EntryPointTable::new(catalog);
        dispatch(catalog, &table, &mut Properties::new(), argv)
    }

    #[test]
    fn test_builtins_registered() {
        let catalog = tool_catalog();
        assert_eq!(catalog.type_ids(), vec![HELP_TOOL_TYPE, PROPERTIES_TOOL_TYPE]);
    }

    #[test]
    fn test_unlinked_popular_commands_are_skipped() {
        let names: Vec<String> = tool_catalog()
            .popular_tools()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["help", "properties"]);
    }

    #[test]
    fn test_no_arguments_matches_explicit_sentinel() {
        let catalog = tool_catalog();

        let (implicit, implicit_out) = run(&catalog, &[]);
        let (explicit, explicit_out) = run(&catalog, &["help", "no-command-specified"]);

        assert_eq!(implicit.unwrap(), 0);
        assert_eq!(explicit.unwrap(), 0);
        assert_eq!(implicit_out, explicit_out);
        assert!(implicit_out.starts_with(
            "cmdhub version 5.1\nNo command specified. You must specify a command.\nPopular commands:\n"
        ));
    }

    #[test]
    fn test_alpha_beta_gamma_listing_and_alias() {
        let calls = Calls::default();
        let catalog = tool_catalog();
        let catalog = recording(catalog, "suite::Gamma", "gamma", &[], &calls);
        let catalog = recording(catalog, "suite::Alpha", "alpha", &["a"], &calls);
        let catalog = recording(catalog, "suite::Beta", "beta", &[], &calls);

        let (status, output) = run(&catalog, &[]);
        assert_eq!(status.unwrap(), 0);

        let all = output
            .split("All possible commands:\n")
            .nth(1)
            .unwrap();
        let names: Vec<&str> = all
            .lines()
            .take_while(|line| line.starts_with('\t'))
            .filter_map(|line| line.split('\t').nth(1))
            .collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma", "help", "properties"]);

        let (status, _) = run(&catalog, &["a", "x", "y"]);
        assert_eq!(status.unwrap(), 7);
        assert_eq!(
            calls.borrow().as_slice(),
            [("alpha".to_string(), vec!["x".to_string(), "y".to_string()])]
        );
    }

    #[test]
    fn test_property_overrides_reach_the_store() {
        let catalog = tool_catalog();
        let table = EntryPointTable::new(&catalog);
        let mut properties = Properties::new();

        let (status, output) = dispatch(
            &catalog,
            &table,
            &mut properties,
            &["props", "-D", "x=1", "-D", "y=2", "x"],
        );

        assert_eq!(status.unwrap(), 0);
        assert_eq!(output, "x=1\n");
        assert_eq!(properties.property("y"), Some("2"));
    }

    #[test]
    fn test_unknown_command_is_fatal() {
        let catalog = tool_catalog();
        let (result, output) = run(&catalog, &["definitely-not-a-real-command"]);

        assert!(result.unwrap_err().is_not_found());
        assert!(output.is_empty());
    }

    #[test]
    fn test_fallback_to_named_entry_point() {
        let catalog = tool_catalog();
        let table = EntryPointTable::new(&catalog).register_entry_point(
            "suite.batch.Main",
            |args: &[String]| -> Result<i32, BoxError> {
                if args.is_empty() {
                    Err("missing topics file".into())
                } else {
                    Ok(3)
                }
            },
        );

        let mut properties = Properties::new();
        let (status, _) = dispatch(&catalog, &table, &mut properties, &["suite.batch.Main", "t.txt"]);
        assert_eq!(status.unwrap(), 3);

        let (failure, _) = dispatch(&catalog, &table, &mut properties, &["suite.batch.Main"]);
        let error = failure.unwrap_err();
        assert!(matches!(error, DispatchError::EntryPoint { .. }));
        assert_eq!(error.to_string(), "entry point 'suite.batch.Main' failed");
    }

    #[test]
    fn test_tool_failure_propagates_unchanged() {
        let catalog = tool_catalog();
        let (result, _) = run(&catalog, &["properties", "-D", "=bad"]);

        match result.unwrap_err() {
            DispatchError::Tool(error) => assert!(error.is_option_parse()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
