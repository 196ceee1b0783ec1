use crate::{BookshelfError, Result};
use directories::ProjectDirs;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Extension of catalog files in the data directory
pub const CATALOG_EXTENSION: &str = "json";

/// Where settings and catalogs live
#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    /// Configuration directory holding `config.yaml`
    pub config_dir: PathBuf,
    /// Directory holding one `<name>.json` file per catalog
    pub data_dir: PathBuf,
}

impl BookshelfPaths {
    /// Platform config directory, catalogs in the current directory
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookshelf").ok_or_else(|| {
            BookshelfError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: std::env::current_dir()?,
        })
    }

    /// Keep everything under one directory (used by tests and `--data-dir`)
    pub fn for_data_dir(data_dir: &Path) -> Self {
        Self {
            config_dir: data_dir.to_path_buf(),
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Replace the catalog directory, keeping the config directory
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Default settings file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.yaml")
    }

    /// File backing the catalog called `name`
    pub fn catalog_file(&self, name: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", name, CATALOG_EXTENSION))
    }

    /// Names of the catalogs present in the data directory, sorted
    pub fn list_catalog_names(&self) -> Result<Vec<String>> {
        if !self.data_dir.is_dir() {
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(&self.data_dir.to_string_lossy()),
            CATALOG_EXTENSION
        );
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries = glob::glob_with(&pattern, options)
            .map_err(|e| BookshelfError::Path(format!("Invalid catalog pattern: {}", e)))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| BookshelfError::Path(e.to_string()))?;
            if !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Create the data directory if needed
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for BookshelfPaths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Self::for_data_dir(&current_dir)
        })
    }
}
