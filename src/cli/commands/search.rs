use super::{CommandContext, CommandHandler};
use crate::catalog::SearchField;
use crate::cli::app::{OutputFormat, SearchBy};
use crate::cli::render;
use crate::Result;
use tracing::debug;

/// Handler for the `search` command
pub struct SearchCommand {
    context: CommandContext,
    pub catalog: Option<String>,
    pub by: SearchBy,
    pub value: String,
    pub format: OutputFormat,
}

impl CommandHandler for SearchCommand {
    fn execute(&self) -> Result<()> {
        let store = self.context.open_catalog(self.catalog.as_deref())?;
        let books = match self.by {
            SearchBy::Author => store.find_by_author_or_year(&self.value, SearchField::Author),
            SearchBy::Year => store.find_by_author_or_year(&self.value, SearchField::Year),
            SearchBy::Title => store.find_by_title(&self.value),
        };
        debug!(by = self.by.label(), matches = books.len(), "Search finished");

        match self.format {
            OutputFormat::Json => println!("{}", render::books_json(&books)?),
            OutputFormat::Text if books.is_empty() => println!("Search result: 0 books"),
            OutputFormat::Text => println!("{}", render::book_listing(&books)),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    pub fn new(
        context: CommandContext,
        catalog: Option<String>,
        by: SearchBy,
        value: String,
        format: OutputFormat,
    ) -> Self {
        Self {
            context,
            catalog,
            by,
            value,
            format,
        }
    }
}
