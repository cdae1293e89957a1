//! Built-in tools
//!
//! | Type id                       | Name         | Aliases |
//! |-------------------------------|--------------|---------|
//! | [`HELP_TOOL_TYPE`]            | `help`       |         |
//! | [`PROPERTIES_TOOL_TYPE`]      | `properties` | `props` |

mod help;
mod properties;

pub use help::HelpTool;
pub use properties::PropertiesTool;

/// Catalog type id of [`HelpTool`]
pub const HELP_TOOL_TYPE: &str = "cmdhub::tools::HelpTool";

/// Catalog type id of [`PropertiesTool`]
pub const PROPERTIES_TOOL_TYPE: &str = "cmdhub::tools::PropertiesTool";
