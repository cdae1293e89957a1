//! Configuration file loading for cmdhub
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CMDHUB_<SECTION>__<KEY>` environment variables
//! 2. File named by `CMDHUB_CONFIG`
//! 3. Project root: `./cmdhub.toml` or `./.cmdhub.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cmdhub/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileFallbackConfig, FileLoggingConfig};
pub use loader::{CONFIG_PATH_ENV, ConfigLoader};
