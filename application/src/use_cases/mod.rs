//! Use cases for cmdhub
//!
//! - [`resolve_tool`]: command name / alias resolution against discovery
//! - [`dispatch`]: the split → resolve → fallback pipeline

pub mod dispatch;
pub mod resolve_tool;
