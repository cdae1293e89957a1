//! Fallback dispatch port
//!
//! When no tool answers to a command, the dispatcher asks an
//! [`EntryPointLocator`] for something else to run under that name: either a
//! tool type that is not part of the discovery set, or a bare
//! [`GenericEntryPoint`] that only knows how to take string arguments and
//! return a status.

use cmdhub_domain::{BoxError, CliTool, ConstructionError};
use std::sync::Arc;
use thiserror::Error;

/// A runnable that is not a [`CliTool`]
pub trait GenericEntryPoint {
    fn invoke(&self, args: &[String]) -> Result<i32, BoxError>;
}

impl<F> GenericEntryPoint for F
where
    F: Fn(&[String]) -> Result<i32, BoxError>,
{
    fn invoke(&self, args: &[String]) -> Result<i32, BoxError> {
        self(args)
    }
}

/// What a fallback lookup found
pub enum FallbackTarget {
    /// A tool type, freshly constructed
    Tool(Box<dyn CliTool>),
    /// A generic entry point
    EntryPoint(Arc<dyn GenericEntryPoint>),
}

impl std::fmt::Debug for FallbackTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackTarget::Tool(tool) => f.debug_tuple("Tool").field(&tool.name()).finish(),
            FallbackTarget::EntryPoint(_) => f.write_str("EntryPoint"),
        }
    }
}

/// Fallback lookup failures
#[derive(Debug, Error)]
pub enum LocateError {
    /// Nothing is known under that name
    #[error("nothing named '{0}' could be located")]
    NotFound(String),

    /// A registered tool type exists but could not be built
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Port for locating fallback targets by name
pub trait EntryPointLocator {
    fn locate(&self, name: &str) -> Result<FallbackTarget, LocateError>;
}
