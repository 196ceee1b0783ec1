use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Book with id: {0} was not found")]
    NotFound(u64),

    #[error("Storage error for {}: {message}", .path.display())]
    Storage { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("CLI error: {0}")]
    Cli(String),
}

impl BookshelfError {
    /// Build a storage error for the given catalog file
    pub fn storage(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BookshelfError::Storage {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the shell can report this error and carry on with the session
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BookshelfError::Validation(_) | BookshelfError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
