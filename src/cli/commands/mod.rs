pub mod add;
pub mod catalogs;
pub mod delete;
pub mod list;
pub mod search;
pub mod shell;
pub mod status;

use crate::catalog::CatalogStore;
use crate::config::Settings;
use crate::io::paths::BookshelfPaths;
use crate::{BookshelfError, Result};

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Resolved locations and settings shared by every handler
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub paths: BookshelfPaths,
    pub settings: Settings,
}

impl CommandContext {
    pub fn new(paths: BookshelfPaths, settings: Settings) -> Self {
        Self { paths, settings }
    }

    /// Open the library named on the command line, or the configured default
    pub fn open_catalog(&self, catalog: Option<&str>) -> Result<CatalogStore> {
        let name = self
            .settings
            .resolve_catalog(catalog.map(str::to_string))
            .ok_or_else(|| {
                BookshelfError::Cli(
                    "No library given. Pass --catalog or set default_catalog in config.yaml"
                        .to_string(),
                )
            })?;
        CatalogStore::open_named(&self.paths, &name)
    }
}
