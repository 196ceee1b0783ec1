use anyhow::{Context, Result};
use bookshelf::{
    cli::app::LogLevel,
    cli::commands::{
        add::AddCommand, catalogs::CatalogsCommand, delete::DeleteCommand, list::ListCommand,
        search::SearchCommand, shell::ShellCommand, status::StatusCommand, CommandContext,
        CommandHandler,
    },
    cli::{Cli, Commands},
    config::SettingsLoader,
    io::BookshelfPaths,
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays clean for the shell and JSON output
fn initialize_tracing(flag: Option<LogLevel>, configured: Option<&str>) {
    let directive = flag
        .map(|level| level.to_filter_directive().to_string())
        .or_else(|| configured.map(str::to_lowercase))
        .unwrap_or_else(|| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base = BookshelfPaths::default();
    let config_file = cli.config.clone().unwrap_or_else(|| base.config_file());
    let settings = SettingsLoader::load_or_default(&config_file)
        .with_context(|| format!("Failed to load settings from {}", config_file.display()))?;

    initialize_tracing(cli.log_level, settings.log_level.as_deref());

    let data_dir = settings.resolve_data_dir(cli.data_dir.clone(), base.data_dir.clone());
    let paths = base.with_data_dir(data_dir);
    debug!(data_dir = %paths.data_dir.display(), "Using data directory");

    let context = CommandContext::new(paths, settings);
    let command = cli.command.unwrap_or(Commands::Shell);
    let command_name = command.name();
    if command.modifies_catalog() {
        context
            .paths
            .ensure_directories()
            .context("Failed to create the data directory")?;
    }

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Shell => Box::new(ShellCommand::new(context)),
        Commands::Catalogs => Box::new(CatalogsCommand::new(context)),
        Commands::Add {
            catalog,
            title,
            author,
            year,
        } => Box::new(AddCommand::new(context, catalog, title, author, year)),
        Commands::Delete { catalog, id } => Box::new(DeleteCommand::new(context, catalog, id)),
        Commands::List { catalog, format } => Box::new(ListCommand::new(context, catalog, format)),
        Commands::Search {
            catalog,
            by,
            value,
            format,
        } => Box::new(SearchCommand::new(context, catalog, by, value, format)),
        Commands::Status { catalog, id, set } => {
            Box::new(StatusCommand::new(context, catalog, id, set.into()))
        }
    };

    debug!(command = command_name, "Running command");
    handler
        .execute()
        .with_context(|| format!("{} failed", handler.name()))?;

    Ok(())
}
