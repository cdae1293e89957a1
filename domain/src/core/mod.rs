//! Core domain concepts shared across all subdomains.
//!
//! - [`program::ProgramInfo`]: name and version of the running program

pub mod program;
