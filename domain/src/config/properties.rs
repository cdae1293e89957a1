//! Process-wide property store.
//!
//! Tools read settings from a [`PropertyStore`]; the dispatcher writes `-D`
//! overrides into it before a tool body runs. The store is passed explicitly
//! through [`ToolContext`](crate::tool::ToolContext) rather than living in a
//! global.

use std::collections::BTreeMap;

/// Key/value configuration store that tools can read and overrides can write.
pub trait PropertyStore {
    /// Set (or replace) a property
    fn set_property(&mut self, key: &str, value: &str);

    /// Look up a property value
    fn property(&self, key: &str) -> Option<&str>;

    /// All properties in key order
    fn entries(&self) -> Vec<(&str, &str)>;
}

/// In-memory property store, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, String>> for Properties {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl PropertyStore for Properties {
    fn set_property(&mut self, key: &str, value: &str) {
        tracing::debug!(key, value, "Setting property");
        self.values.insert(key.to_string(), value.to_string());
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}
