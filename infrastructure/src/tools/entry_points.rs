//! Fallback targets for commands no tool answers to.
//!
//! [`EntryPointTable`] implements [`EntryPointLocator`] by checking, in order:
//!
//! 1. tool types registered in the [`ToolCatalog`], by type id
//! 2. named [`GenericEntryPoint`]s registered on the table
//! 3. executables on `PATH` (when enabled), run as child processes

use cmdhub_application::{EntryPointLocator, FallbackTarget, GenericEntryPoint, LocateError};
use cmdhub_domain::BoxError;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use tracing::debug;

use super::catalog::ToolCatalog;

/// Status reported for a child that exited without a code (killed by a signal)
const ABNORMAL_EXIT: i32 = 1;

/// An executable run with the tool arguments, inheriting stdio
#[derive(Debug, Clone)]
pub struct ExternalProgram {
    path: PathBuf,
}

impl ExternalProgram {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GenericEntryPoint for ExternalProgram {
    fn invoke(&self, args: &[String]) -> Result<i32, BoxError> {
        debug!(program = %self.path.display(), ?args, "Spawning external program");
        let status = Command::new(&self.path).args(args).status()?;
        Ok(status.code().unwrap_or(ABNORMAL_EXIT))
    }
}

/// Locates fallback targets by name
pub struct EntryPointTable<'a> {
    catalog: &'a ToolCatalog,
    entries: Vec<(String, Arc<dyn GenericEntryPoint>)>,
    search_path: bool,
}

impl<'a> EntryPointTable<'a> {
    /// Table backed by a catalog, with `PATH` search disabled
    pub fn new(catalog: &'a ToolCatalog) -> Self {
        Self {
            catalog,
            entries: Vec::new(),
            search_path: false,
        }
    }

    /// Register a named entry point
    pub fn register_entry_point(
        mut self,
        name: impl Into<String>,
        entry: impl GenericEntryPoint + 'static,
    ) -> Self {
        self.entries.push((name.into(), Arc::new(entry)));
        self
    }

    /// Enable or disable looking up executables on `PATH`
    pub fn with_path_search(mut self, enabled: bool) -> Self {
        self.search_path = enabled;
        self
    }

    fn find_on_path(&self, name: &str) -> Option<PathBuf> {
        if !self.search_path || name.is_empty() {
            return None;
        }
        which::which(name).ok()
    }
}

impl EntryPointLocator for EntryPointTable<'_> {
    fn locate(&self, name: &str) -> Result<FallbackTarget, LocateError> {
        if let Some(constructed) = self.catalog.construct(name) {
            debug!(name, "Fallback found registered tool type");
            return Ok(FallbackTarget::Tool(constructed?));
        }

        if let Some((_, entry)) = self.entries.iter().find(|(n, _)| n == name) {
            debug!(name, "Fallback found named entry point");
            return Ok(FallbackTarget::EntryPoint(Arc::clone(entry)));
        }

        if let Some(path) = self.find_on_path(name) {
            debug!(name, path = %path.display(), "Fallback found executable");
            return Ok(FallbackTarget::EntryPoint(Arc::new(ExternalProgram::new(path))));
        }

        Err(LocateError::NotFound(name.to_string()))
    }
}
