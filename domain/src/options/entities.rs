//! Global option schema shared by every parsed-option tool

use thiserror::Error;

use crate::config::PropertyStore;

/// One entry of the fixed option schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Short flag character (`D` for `-D`)
    pub short: char,
    /// Placeholder shown for the option's value
    pub value_name: &'static str,
    /// Table description
    pub description: &'static str,
    /// Whether the option may be given more than once
    pub repeatable: bool,
}

impl OptionSpec {
    /// Flag column as rendered in help, e.g. `-I <indexref>`
    pub fn flag(&self) -> String {
        format!("-{} <{}>", self.short, self.value_name)
    }

    /// Usage fragment, e.g. `[-D <property=value>]...`
    pub fn usage(&self) -> String {
        let suffix = if self.repeatable { "..." } else { "" };
        format!("[{}]{}", self.flag(), suffix)
    }
}

/// `-D`: property assignment
pub const PROPERTY_OPTION: OptionSpec = OptionSpec {
    short: 'D',
    value_name: "property=value",
    description: "specify property name=value",
    repeatable: true,
};

/// `-I`: index location override (parsed, not consumed)
pub const INDEX_OPTION: OptionSpec = OptionSpec {
    short: 'I',
    value_name: "indexref",
    description: "override the default indexref (location)",
    repeatable: false,
};

/// The fixed schema, in display order
pub const GLOBAL_OPTIONS: [OptionSpec; 2] = [PROPERTY_OPTION, INDEX_OPTION];

/// Malformed option value
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionSyntaxError {
    #[error("property assignment '{0}' has an empty name")]
    EmptyPropertyName(String),
}

/// Split a `-D` value into key and value.
///
/// The value is everything after the first `=`; a bare key means `"true"`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), OptionSyntaxError> {
    let (key, value) = match raw.split_once('=') {
        Some((key, value)) => (key, value),
        None => (raw, "true"),
    };

    if key.trim().is_empty() {
        return Err(OptionSyntaxError::EmptyPropertyName(raw.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Global options parsed from a tool's arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// `-D` assignments in command-line order
    pub properties: Vec<(String, String)>,
    /// `-I` value. Parsed but not consumed by dispatch.
    pub index_ref: Option<String>,
}

impl GlobalOptions {
    /// Write every `-D` assignment into the store, in order
    pub fn apply_to(&self, store: &mut dyn PropertyStore) {
        for (key, value) in &self.properties {
            store.set_property(key, value);
        }
    }
}
