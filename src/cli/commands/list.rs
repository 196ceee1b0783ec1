use super::{CommandContext, CommandHandler};
use crate::cli::app::OutputFormat;
use crate::cli::render;
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    context: CommandContext,
    pub catalog: Option<String>,
    pub format: OutputFormat,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let store = self.context.open_catalog(self.catalog.as_deref())?;
        let books = store.get_all();

        match self.format {
            OutputFormat::Json => println!("{}", render::books_json(books)?),
            OutputFormat::Text if books.is_empty() => {
                println!("There are no books in the library")
            }
            OutputFormat::Text => {
                println!("'{}' Library Books:", store.name());
                println!("{}", render::book_listing(books));
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    pub fn new(context: CommandContext, catalog: Option<String>, format: OutputFormat) -> Self {
        Self {
            context,
            catalog,
            format,
        }
    }
}
