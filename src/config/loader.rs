use super::types::{Settings, LOG_LEVELS};
use crate::{BookshelfError, Result};
use std::path::Path;
use tracing::debug;

/// Reads `config.yaml`
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from `path`; a missing file gives the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }
        Self::load_file(path)
    }

    /// Load and validate a settings file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BookshelfError::Config(format!("Failed to read settings file {}: {}", path_str, e))
        })?;

        // an empty file is a valid, empty document
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = serde_yaml_ng::from_str(&contents)?;

        Self::validate(&settings)?;
        debug!(path = %path_str, "Loaded settings");
        Ok(settings)
    }

    fn validate(settings: &Settings) -> Result<()> {
        if let Some(level) = &settings.log_level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(BookshelfError::Config(format!(
                    "Unknown log_level '{}'. Expected one of: {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
        }
        if let Some(name) = &settings.default_catalog {
            crate::catalog::validation::validate_catalog_name(name)
                .map_err(|e| BookshelfError::Config(format!("Invalid default_catalog: {}", e)))?;
        }
        Ok(())
    }
}
