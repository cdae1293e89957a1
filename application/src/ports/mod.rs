//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Tool discovery itself is a domain trait
//! ([`ToolDiscovery`](cmdhub_domain::ToolDiscovery)); the port here covers the
//! fallback path taken when discovery has no answer.

pub mod entry_point;

pub use entry_point::{EntryPointLocator, FallbackTarget, GenericEntryPoint, LocateError};
