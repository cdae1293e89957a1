//! Global options accepted by every parsed-option tool.
//!
//! - `-D <property=value>` (repeatable): set a property before the tool runs
//! - `-I <indexref>`: index location override, parsed and kept inert

pub mod entities;
pub mod usage;

pub use entities::{
    GLOBAL_OPTIONS, GlobalOptions, INDEX_OPTION, OptionSpec, OptionSyntaxError, PROPERTY_OPTION,
    parse_assignment,
};
pub use usage::{option_table, synthesize_help, usage_line};
