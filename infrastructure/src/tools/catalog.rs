//! Tool Catalog
//!
//! The [`ToolCatalog`] is the manifest of every tool type linked into the
//! process. Each registration pairs a fully qualified type id with a
//! no-argument constructor. The catalog implements [`ToolDiscovery`]:
//!
//! - `all_tools()` constructs every registration, in registration order
//! - `popular_tools()` constructs the curated list, in curated order
//!
//! Tools are built fresh on every call; nothing is cached between scans.
//!
//! # Usage
//!
//! ```ignore
//! use cmdhub_infrastructure::tools::ToolCatalog;
//!
//! let catalog = ToolCatalog::new()
//!     .register_default::<HelpTool>("cmdhub::tools::HelpTool")
//!     .register("suite::Indexer", || Indexer::from_env())
//!     .with_popular(["cmdhub::tools::HelpTool", "suite::Indexer"]);
//! ```
//!
//! # Soft failures
//!
//! A registration whose constructor fails is logged and left out of the
//! listing; the rest of the scan continues. Popular ids with no registration
//! are skipped the same way.

use cmdhub_domain::{CliTool, ConstructionError, ToolDiscovery};
use tracing::{debug, warn};

/// No-argument constructor for a registered tool type
pub type ToolFactory = Box<dyn Fn() -> Result<Box<dyn CliTool>, ConstructionError>>;

struct Registration {
    type_id: String,
    construct: ToolFactory,
}

/// Manifest of tool types plus the curated popular list
#[derive(Default)]
pub struct ToolCatalog {
    registrations: Vec<Registration>,
    popular: Vec<String>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool type with its constructor
    pub fn register<F>(mut self, type_id: impl Into<String>, construct: F) -> Self
    where
        F: Fn() -> Result<Box<dyn CliTool>, ConstructionError> + 'static,
    {
        let type_id = type_id.into();
        if self.contains(&type_id) {
            warn!(type_id = %type_id, "Tool type registered twice; the first registration wins");
        }
        self.registrations.push(Registration {
            type_id,
            construct: Box::new(construct),
        });
        self
    }

    /// Register a tool type constructed through `Default`
    pub fn register_default<T>(self, type_id: impl Into<String>) -> Self
    where
        T: CliTool + Default + 'static,
    {
        self.register(
            type_id,
            || -> Result<Box<dyn CliTool>, ConstructionError> { Ok(Box::new(T::default())) },
        )
    }

    /// Set the curated popular list (type ids, in display order)
    pub fn with_popular<I, S>(mut self, type_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular = type_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a type id is registered
    pub fn contains(&self, type_id: &str) -> bool {
        self.registrations.iter().any(|r| r.type_id == type_id)
    }

    /// Registered type ids, in registration order
    pub fn type_ids(&self) -> Vec<&str> {
        self.registrations
            .iter()
            .map(|r| r.type_id.as_str())
            .collect()
    }

    /// The curated popular list as configured
    pub fn popular_ids(&self) -> &[String] {
        &self.popular
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Construct a single registered type.
    ///
    /// Returns `None` when the type id is not registered.
    pub fn construct(&self, type_id: &str) -> Option<Result<Box<dyn CliTool>, ConstructionError>> {
        self.registrations
            .iter()
            .find(|r| r.type_id == type_id)
            .map(|r| (r.construct)())
    }
}

impl ToolDiscovery for ToolCatalog {
    fn popular_tools(&self) -> Vec<Box<dyn CliTool>> {
        let mut tools = Vec::with_capacity(self.popular.len());

        for type_id in &self.popular {
            match self.construct(type_id) {
                Some(Ok(tool)) => tools.push(tool),
                Some(Err(e)) => {
                    debug!(type_id = %type_id, error = %e, "Dropping popular command");
                }
                None => {
                    debug!(type_id = %type_id, "Popular command is not registered, skipping");
                }
            }
        }

        tools
    }

    fn all_tools(&self) -> Vec<Box<dyn CliTool>> {
        let mut tools = Vec::with_capacity(self.registrations.len());

        for registration in &self.registrations {
            match (registration.construct)() {
                Ok(tool) => tools.push(tool),
                Err(e) => {
                    warn!(
                        type_id = %registration.type_id,
                        error = %e,
                        "Failed to construct tool, leaving it out"
                    );
                }
            }
        }

        debug!(count = tools.len(), "Discovered tools");
        tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdhub_domain::{ToolContext, ToolError};

    struct Stub(&'static str);

    impl CliTool for Stub {
        fn name(&self) -> &str {
            self.0
        }

        fn run(&self, _args: &[String], _ctx: &mut ToolContext<'_>) -> Result<i32, ToolError> {
            Ok(0)
        }
    }

    #[derive(Default)]
    struct Defaulted;

    impl CliTool for Defaulted {
        fn name(&self) -> &str {
            "defaulted"
        }

        fn run(&self, _args: &[String], _ctx: &mut ToolContext<'_>) -> Result<i32, ToolError> {
            Ok(0)
        }
    }

    fn stub(name: &'static str) -> impl Fn() -> Result<Box<dyn CliTool>, ConstructionError> {
        move || -> Result<Box<dyn CliTool>, ConstructionError> { Ok(Box::new(Stub(name))) }
    }

    fn broken(type_id: &'static str) -> impl Fn() -> Result<Box<dyn CliTool>, ConstructionError> {
        move || -> Result<Box<dyn CliTool>, ConstructionError> {
            Err(ConstructionError::new(type_id, "no index configured"))
        }
    }

    fn names(tools: &[Box<dyn CliTool>]) -> Vec<&str> {
        tools.iter().map(|t| t.name()).collect()
    }

    fn catalog() -> ToolCatalog {
        ToolCatalog::new()
            .register("suite::Gamma", stub("gamma"))
            .register("suite::Alpha", stub("alpha"))
            .register("suite::Broken", broken("suite::Broken"))
            .register("suite::Beta", stub("beta"))
    }

    #[test]
    fn test_all_tools_in_registration_order() {
        let tools = catalog().all_tools();
        assert_eq!(names(&tools), vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_popular_tools_keep_curated_order_and_skip_failures() {
        let catalog = catalog().with_popular([
            "suite::Beta",
            "suite::Missing",
            "suite::Broken",
            "suite::Gamma",
        ]);

        let tools = catalog.popular_tools();
        assert_eq!(names(&tools), vec!["beta", "gamma"]);
    }

    #[test]
    fn test_popular_tools_each_constructible_entry_exactly_once() {
        let popular = ["suite::Alpha", "suite::Gamma", "suite::Beta"];
        let catalog = catalog().with_popular(popular);

        let tools = catalog.popular_tools();
        assert_eq!(tools.len(), popular.len());
        for (tool, type_id) in tools.iter().zip(popular) {
            let expected = catalog.construct(type_id).unwrap().unwrap();
            assert_eq!(tool.name(), expected.name());
        }
    }

    #[test]
    fn test_popular_tools_empty_by_default() {
        assert!(catalog().popular_tools().is_empty());
    }

    #[test]
    fn test_construct() {
        let catalog = catalog();
        assert_eq!(catalog.construct("suite::Alpha").unwrap().unwrap().name(), "alpha");
        assert!(catalog.construct("suite::Broken").unwrap().is_err());
        assert!(catalog.construct("suite::Missing").is_none());
    }

    #[test]
    fn test_register_default() {
        let catalog = ToolCatalog::new().register_default::<Defaulted>("suite::Defaulted");
        assert!(catalog.contains("suite::Defaulted"));
        assert_eq!(names(&catalog.all_tools()), vec!["defaulted"]);
    }

    #[test]
    fn test_duplicate_type_id_first_wins() {
        let catalog = ToolCatalog::new()
            .register("suite::Same", stub("first"))
            .register("suite::Same", stub("second"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.construct("suite::Same").unwrap().unwrap().name(), "first");
    }

    #[test]
    fn test_fresh_instances_per_scan() {
        let catalog = catalog();
        let first = catalog.all_tools();
        let second = catalog.all_tools();
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn test_type_ids() {
        let catalog = catalog().with_popular(["suite::Alpha"]);
        assert_eq!(
            catalog.type_ids(),
            vec!["suite::Gamma", "suite::Alpha", "suite::Broken", "suite::Beta"]
        );
        assert_eq!(catalog.popular_ids(), ["suite::Alpha".to_string()]);
        assert!(!catalog.is_empty());
    }
}
