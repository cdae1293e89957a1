//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "CMDHUB_CONFIG";

/// Prefix for per-key environment overrides (`CMDHUB_LOGGING__LEVEL`)
const ENV_PREFIX: &str = "CMDHUB_";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["cmdhub.toml", ".cmdhub.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CMDHUB_<SECTION>__<KEY>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./cmdhub.toml` or `./.cmdhub.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/cmdhub/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["config", "log"])
                .split("__"),
        );

        figment.extract().map_err(Box::new)
    }

    /// Load defaults plus a single file, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Explicit config path from `CMDHUB_CONFIG`, if set
    pub fn explicit_config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/cmdhub/config.toml if set,
    /// otherwise falls back to ~/.config/cmdhub/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cmdhub").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}
