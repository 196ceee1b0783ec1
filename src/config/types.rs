use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log levels accepted in settings files and on the command line
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// User settings read from `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory holding catalog files (defaults to the working directory)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default log level when `--log-level` is not given
    #[serde(default)]
    pub log_level: Option<String>,

    /// Catalog used by subcommands when `--catalog` is omitted
    #[serde(default)]
    pub default_catalog: Option<String>,
}

impl Settings {
    /// Pick the data directory: explicit flag, then settings, then `fallback`
    pub fn resolve_data_dir(&self, flag: Option<PathBuf>, fallback: PathBuf) -> PathBuf {
        flag.or_else(|| self.data_dir.clone()).unwrap_or(fallback)
    }

    /// Pick the catalog name: explicit flag, then settings
    pub fn resolve_catalog(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.default_catalog.clone())
    }
}
