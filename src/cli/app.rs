use crate::catalog::BookStatus;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bookshelf: a personal book catalog kept in local JSON files
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Personal book catalog kept in local JSON files")]
#[command(
    long_about = "Bookshelf keeps one JSON file per library. Run without a command for the interactive shell, or use the subcommands for scripting."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the library files (defaults to the current directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to config.yaml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu-driven session (the default)
    Shell,

    /// Lists available libraries
    Catalogs,

    /// Adds a book
    Add {
        /// Library name
        #[arg(short, long)]
        catalog: Option<String>,

        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Publication year
        #[arg(long)]
        year: String,
    },

    /// Deletes a book by id
    Delete {
        /// Library name
        #[arg(short, long)]
        catalog: Option<String>,

        #[arg(long)]
        id: u64,
    },

    /// Lists every book
    List {
        /// Library name
        #[arg(short, long)]
        catalog: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Searches by author, title, or year
    Search {
        /// Library name
        #[arg(short, long)]
        catalog: Option<String>,

        /// Field to match
        #[arg(long, value_enum)]
        by: SearchBy,

        /// Value to look for (title matching ignores case)
        #[arg(long)]
        value: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Changes the availability of a book
    Status {
        /// Library name
        #[arg(short, long)]
        catalog: Option<String>,

        #[arg(long)]
        id: u64,

        /// New status
        #[arg(long, value_enum)]
        set: StatusArg,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Shell => "shell",
            Commands::Catalogs => "catalogs",
            Commands::Add { .. } => "add",
            Commands::Delete { .. } => "delete",
            Commands::List { .. } => "list",
            Commands::Search { .. } => "search",
            Commands::Status { .. } => "status",
        }
    }

    /// Check if this command rewrites a library file
    pub fn modifies_catalog(&self) -> bool {
        matches!(
            self,
            Commands::Shell | Commands::Add { .. } | Commands::Delete { .. } | Commands::Status { .. }
        )
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Search criteria offered by the CLI and the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Author,
    Title,
    Year,
}

impl SearchBy {
    pub fn label(&self) -> &'static str {
        match self {
            SearchBy::Author => "author",
            SearchBy::Title => "title",
            SearchBy::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Available,
    CheckedOut,
}

impl From<StatusArg> for BookStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Available => BookStatus::Available,
            StatusArg::CheckedOut => BookStatus::CheckedOut,
        }
    }
}
