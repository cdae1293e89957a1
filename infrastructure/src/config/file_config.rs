//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [properties]
//! "index.path" = "/var/lib/index"
//!
//! [logging]
//! level = "info"
//!
//! [fallback]
//! search_path = true
//! ```

use cmdhub_domain::Properties;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("logging.level cannot be empty")]
    EmptyLogLevel,

    #[error("property name cannot be empty")]
    EmptyPropertyName,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Default tracing filter when `CMDHUB_LOG` is unset
    pub level: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Raw fallback dispatch configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFallbackConfig {
    /// Look up unknown commands as executables on `PATH`
    pub search_path: bool,
}

impl Default for FileFallbackConfig {
    fn default() -> Self {
        Self { search_path: true }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Initial property values; `-D` overrides win over these
    pub properties: BTreeMap<String, String>,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Fallback dispatch settings
    pub fallback: FileFallbackConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogLevel);
        }

        if self.properties.keys().any(|k| k.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyPropertyName);
        }

        Ok(())
    }

    /// Property store seeded from `[properties]`
    pub fn initial_properties(&self) -> Properties {
        Properties::from(self.properties.clone())
    }
}
